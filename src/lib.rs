//! # valtree
//!
//! A minimal hierarchical key/value text format: parsing into a tree, writing
//! trees back to text, and dot-path queries and inserts.
//!
//! ## What does it look like?
//!
//! ```text
//! name    probe       // display name
//! engine
//!     thrust  4500
//!     fuel    hydrazine
//! ```
//!
//! Each line is a key and an optional value. Indentation nests lines under the
//! previous shallower line. See [`format`] for the full description.
//!
//! ## Quick Start
//!
//! ```rust
//! use valtree::{from_str, to_string, Node};
//!
//! let mut tree = from_str("name probe // display name\nengine\n\tthrust 4500\n").tree;
//!
//! assert_eq!(tree.query("name").map(Node::as_str), Some("probe"));
//! assert_eq!(tree.query("engine.thrust").map(Node::as_i64), Some(4500));
//! assert!(tree.query("engine.isp").is_none());
//!
//! tree.add_tree("engine.isp", "220");
//! assert_eq!(to_string(&tree), "name probe\nengine\n\tthrust 4500\n\tisp 220\n");
//! ```
//!
//! ## Reading and writing streams
//!
//! The crate never opens files itself. Hand it any reader or writer:
//!
//! ```rust
//! use valtree::{from_reader, to_writer};
//! use std::io::Cursor;
//!
//! let parsed = from_reader(Cursor::new(b"a 1\nb 2\n")).unwrap();
//! assert!(!parsed.is_truncated());
//!
//! let mut buffer = Vec::new();
//! to_writer(&mut buffer, &parsed.tree).unwrap();
//! assert_eq!(buffer, b"a 1\nb 2\n");
//! ```
//!
//! ## Failure model
//!
//! - Parsing never fails. Malformed lines are skipped and numbers that do
//!   not parse read as zero.
//! - Input past the size guard is dropped and the result is marked
//!   [truncated](ParseStatus::Truncated); a warning is logged through the
//!   [`log`] facade.
//! - Lookups that find nothing return `None`.
//! - Only I/O and UTF-8 failures are reported as [`Error`]s.
//!
//! ## Concurrency
//!
//! Parsing and writing are synchronous. Trees are plain owned data: share them
//! across threads the way any `Vec`-backed structure is shared.

pub mod de;
pub mod error;
pub mod format;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod node;
pub mod number;
pub mod options;
pub mod path;
pub mod record;
pub mod ser;

pub use de::{Deserializer, ParseStatus, Parsed};
pub use error::{Error, Result};
pub use map::PathMap;
pub use node::Node;
pub use options::{Indent, LineEnding, ParseOptions, WriteOptions, DEFAULT_MAX_SIZE};
pub use ser::Serializer;

use std::io;

/// Parse a tree from text using the default size guard.
///
/// # Examples
///
/// ```rust
/// use valtree::from_str;
///
/// let parsed = from_str("speed 12 // max speed\n");
/// let speed = parsed.tree.child("speed").unwrap();
/// assert_eq!(speed.as_str(), "12");
/// assert_eq!(speed.as_f64(), 12.0);
/// ```
#[must_use]
pub fn from_str(s: &str) -> Parsed {
    from_str_with_options(s, ParseOptions::default())
}

/// Parse a tree from text with custom options.
///
/// # Examples
///
/// ```rust
/// use valtree::{from_str_with_options, ParseOptions, ParseStatus};
///
/// let parsed = from_str_with_options("a 1\nb 2\n", ParseOptions::new().with_max_size(4));
/// assert_eq!(parsed.status, ParseStatus::Truncated { scanned: 4 });
/// assert_eq!(parsed.tree.len(), 1);
/// ```
#[must_use]
pub fn from_str_with_options(s: &str, options: ParseOptions) -> Parsed {
    Deserializer::with_options(s, &options).parse()
}

/// Parse a tree from bytes of UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
pub fn from_slice(v: &[u8]) -> Result<Parsed> {
    let s = std::str::from_utf8(v)?;
    Ok(from_str(s))
}

/// Parse a tree from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails or the stream is not valid UTF-8.
pub fn from_reader<R>(reader: R) -> Result<Parsed>
where
    R: io::Read,
{
    from_reader_with_options(reader, ParseOptions::default())
}

/// Parse a tree from an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if reading fails or the stream is not valid UTF-8.
pub fn from_reader_with_options<R>(mut reader: R, options: ParseOptions) -> Result<Parsed>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let s = std::str::from_utf8(&bytes)?;
    Ok(from_str_with_options(s, options))
}

/// Write a tree as text with the default layout.
///
/// # Examples
///
/// ```rust
/// use valtree::{to_string, Node};
///
/// let mut root = Node::empty();
/// root.add_tree("x.y.z", "9");
/// assert_eq!(to_string(&root), "x\n\ty\n\t\tz 9\n");
/// ```
#[must_use]
pub fn to_string(node: &Node) -> String {
    to_string_with_options(node, WriteOptions::default())
}

/// Write a tree as text with a custom layout.
#[must_use]
pub fn to_string_with_options(node: &Node, options: WriteOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize(node);
    serializer.into_inner()
}

/// Write a tree to an I/O stream.
///
/// # Errors
///
/// Returns an error if writing fails. Output written before the failure is
/// left in place.
pub fn to_writer<W>(writer: W, node: &Node) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, node, WriteOptions::default())
}

/// Write a tree to an I/O stream with a custom layout.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_writer_with_options<W>(mut writer: W, node: &Node, options: WriteOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(node, options);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
// Example configuration
a 1
b 2.5 // trailing
c
\td hello world
\te
\t\tf 7
g-is-long
\th 5
";

    #[test]
    fn test_parse_sample() {
        let parsed = from_str(SAMPLE);
        assert_eq!(parsed.status, ParseStatus::Complete);

        let tree = parsed.tree;
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.query("b").map(Node::as_f64), Some(2.5));
        assert_eq!(tree.query("c.d").map(Node::as_str), Some("hello world"));
        assert_eq!(tree.query("c.e.f").map(Node::as_i64), Some(7));
        assert_eq!(
            tree.child("g-is-long").and_then(|g| g.child("h")).map(Node::as_str),
            Some("5")
        );
    }

    #[test]
    fn test_write_sample_drops_comments() {
        let tree = from_str(SAMPLE).tree;
        let text = to_string(&tree);
        assert!(!text.contains("//"));
        assert_eq!(from_str(&text).tree, tree);
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(from_slice(b"a 1\n").is_ok());
        assert_eq!(
            from_slice(&[b'k', b' ', 0xff]).unwrap_err(),
            Error::InvalidUtf8 { valid_up_to: 2 }
        );
    }

    #[test]
    fn test_display_matches_to_string() {
        let tree = from_str(SAMPLE).tree;
        assert_eq!(tree.to_string(), to_string(&tree));
    }
}
