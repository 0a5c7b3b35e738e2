//! Configuration options for parsing and writing value trees.
//!
//! This module provides:
//!
//! - [`ParseOptions`]: input guards applied while reading text
//! - [`WriteOptions`]: layout of the text produced by the serializer
//! - [`Indent`] / [`LineEnding`]: the layout choices themselves
//!
//! ## Examples
//!
//! ```rust
//! use valtree::{from_str_with_options, to_string_with_options, Indent, ParseOptions, WriteOptions};
//!
//! let parsed = from_str_with_options("a 1\n", ParseOptions::new().with_max_size(1024));
//! assert!(!parsed.is_truncated());
//!
//! let options = WriteOptions::new().with_indent(Indent::Spaces(2));
//! let text = to_string_with_options(&parsed.tree, options);
//! assert_eq!(text, "a 1\n");
//! ```

/// Maximum number of bytes scanned by default before a parse is truncated (8 MiB).
pub const DEFAULT_MAX_SIZE: usize = 8 * 1024 * 1024;

/// Options applied while parsing text into a tree.
///
/// # Examples
///
/// ```rust
/// use valtree::{ParseOptions, DEFAULT_MAX_SIZE};
///
/// let options = ParseOptions::new();
/// assert_eq!(options.max_size, DEFAULT_MAX_SIZE);
///
/// let options = ParseOptions::unlimited();
/// assert_eq!(options.max_size, usize::MAX);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Lines ending past this byte offset are not read.
    pub max_size: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl ParseOptions {
    /// Creates default options (8 MiB size guard).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options without a size guard.
    ///
    /// Only use this for trusted input: nesting depth is then bounded by nothing
    /// but the length of the buffer.
    #[must_use]
    pub fn unlimited() -> Self {
        ParseOptions {
            max_size: usize::MAX,
        }
    }

    /// Sets the size guard in bytes.
    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Indentation unit written once per depth level.
///
/// # Examples
///
/// ```rust
/// use valtree::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text written for a single depth level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Line terminator written after every line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Layout options for serialization.
///
/// # Examples
///
/// ```rust
/// use valtree::{Indent, LineEnding, WriteOptions};
///
/// let options = WriteOptions::new()
///     .with_indent(Indent::Spaces(2))
///     .with_line_ending(LineEnding::CrLf)
///     .with_separator('\t');
/// assert_eq!(options.separator, '\t');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    pub indent: Indent,
    pub line_ending: LineEnding,
    /// Written between a key and a non-empty value. Must be a space or a tab
    /// for the output to parse back.
    pub separator: char,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: Indent::default(),
            line_ending: LineEnding::default(),
            separator: ' ',
        }
    }
}

impl WriteOptions {
    /// Creates default options (tab indentation, `\n`, single space separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets the key/value separator.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let parse = ParseOptions::default();
        assert_eq!(parse.max_size, 8 * 1024 * 1024);

        let write = WriteOptions::default();
        assert_eq!(write.indent, Indent::Tab);
        assert_eq!(write.line_ending.as_str(), "\n");
        assert_eq!(write.separator, ' ');
    }

    #[test]
    fn test_spaces_indent_unit() {
        assert_eq!(Indent::Spaces(0).unit(), "");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
    }
}
