//! Tree reconstruction.
//!
//! This module turns text into a [`Node`] tree. Records come from
//! [`Records`](crate::record::Records); their depth is the only structural
//! signal:
//!
//! - a record deeper than the currently open node starts a new level below it,
//!   whatever the size of the jump
//! - a record at the same or a shallower depth closes open levels until it
//!   finds a shallower ancestor, and becomes that ancestor's next child
//!
//! Each open level keeps the depth of the record that opened it, so siblings
//! are compared against their ancestors rather than against a fixed
//! indentation width.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use valtree::from_str;
//!
//! let parsed = from_str("a\n  b 1\n  c 2\nd 3\n");
//! let tree = parsed.tree;
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.query("a").map(|a| a.len()), Some(2));
//! ```

use crate::record::{Record, Records};
use crate::{Node, ParseOptions};

/// Whether the whole input was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    Complete,
    /// The size guard stopped the parse after `scanned` bytes.
    Truncated { scanned: usize },
}

/// Result of parsing: the tree and whether the input was truncated.
///
/// A truncated parse still holds every node read before the size guard.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub tree: Node,
    pub status: ParseStatus,
}

impl Parsed {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self.status, ParseStatus::Truncated { .. })
    }

    #[must_use]
    pub fn into_tree(self) -> Node {
        self.tree
    }
}

/// Parses text into a tree.
///
/// Created via [`Deserializer::from_str`] or [`Deserializer::with_options`].
pub struct Deserializer<'de> {
    records: Records<'de>,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &'de str, options: &ParseOptions) -> Self {
        Deserializer {
            records: Records::with_options(input, options),
        }
    }

    /// Consumes the input and returns the root of the tree.
    pub fn parse(mut self) -> Parsed {
        let mut count = 0usize;
        let tree = build_tree(self.records.by_ref().inspect(|_| count += 1));

        let status = if self.records.truncated() {
            let scanned = self.records.position();
            log::warn!(
                "parse truncated after {scanned} bytes: input exceeds the size guard"
            );
            ParseStatus::Truncated { scanned }
        } else {
            ParseStatus::Complete
        };

        log::debug!("parsed {count} records into {} top-level nodes", tree.len());
        Parsed { tree, status }
    }
}

/// Builds a tree from records in input order.
///
/// The returned root never takes a key or value from the records; every record
/// becomes a descendant of it.
///
/// # Examples
///
/// ```rust
/// use valtree::de::build_tree;
/// use valtree::record::Record;
///
/// let records = [
///     Record { line: 1, depth: 0, key: "a", value: "" },
///     Record { line: 2, depth: 4, key: "b", value: "1" },
///     Record { line: 3, depth: 0, key: "c", value: "2" },
/// ];
/// let root = build_tree(records);
/// assert_eq!(root.len(), 2);
/// assert_eq!(root.query("a.b").map(|b| b.as_i64()), Some(1));
/// ```
pub fn build_tree<'a, I>(records: I) -> Node
where
    I: IntoIterator<Item = Record<'a>>,
{
    let mut root = Node::empty();
    // Open levels, innermost last; the root sits below all of them.
    let mut stack: Vec<(usize, Node)> = Vec::new();

    for record in records {
        close_levels(&mut root, &mut stack, Some(record.depth));
        stack.push((record.depth, Node::new(record.key, record.value)));
    }
    close_levels(&mut root, &mut stack, None);

    root
}

/// Pops every open level at `depth` or deeper (all of them for `None`),
/// attaching each to the level below it.
fn close_levels(root: &mut Node, stack: &mut Vec<(usize, Node)>, depth: Option<usize>) {
    while let Some((top, _)) = stack.last() {
        if depth.is_some_and(|depth| *top < depth) {
            break;
        }
        let Some((_, node)) = stack.pop() else {
            break;
        };
        match stack.last_mut() {
            Some((_, parent)) => parent.add_child(node),
            None => root.add_child(node),
        };
    }
}
