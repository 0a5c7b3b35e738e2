//! Tree serialization.
//!
//! This module provides the [`Serializer`] that writes a [`Node`] tree back to
//! the line-oriented text format, one line per node that has a key or a value:
//!
//! ```text
//! <indent * depth><key><separator><value><line ending>
//! ```
//!
//! Children follow their parent's line at one more level of indentation.
//! Nodes without a key and a value get no line of their own, but their
//! children are still written.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use valtree::{to_string, Node};
//!
//! let mut root = Node::empty();
//! root.add_tree("window.width", "640");
//! assert_eq!(to_string(&root), "window\n\twidth 640\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use valtree::{Indent, Node, Serializer, WriteOptions};
//!
//! let mut root = Node::empty();
//! root.add_tree("a.b", "1");
//!
//! let mut serializer = Serializer::new(WriteOptions::new().with_indent(Indent::Spaces(2)));
//! serializer.serialize(&root);
//! assert_eq!(serializer.into_inner(), "a\n  b 1\n");
//! ```

use crate::{Node, WriteOptions};

/// Writes trees as indented text.
///
/// Created via [`Serializer::new`] with the layout to use.
pub struct Serializer {
    output: String,
    options: WriteOptions,
    indent_unit: String,
}

impl Serializer {
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            indent_unit: options.indent.unit(),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `root` and all of its descendants to the output.
    ///
    /// A root with neither key nor value is treated as an invisible container:
    /// its children are written at depth zero. Otherwise the root itself is
    /// written at depth zero.
    pub fn serialize(&mut self, root: &Node) {
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if has_line(root) {
            stack.push((root, 0));
        } else {
            stack.extend(root.children().iter().rev().map(|child| (child, 0)));
        }

        while let Some((node, depth)) = stack.pop() {
            if has_line(node) {
                self.write_line(node, depth);
            }
            stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
        }
    }

    fn write_line(&mut self, node: &Node, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(&self.indent_unit);
        }
        self.output.push_str(node.key());
        if !node.as_str().is_empty() {
            self.output.push(self.options.separator);
            self.output.push_str(node.as_str());
        }
        self.output.push_str(self.options.line_ending.as_str());
    }
}

fn has_line(node: &Node) -> bool {
    !node.key().is_empty() || !node.as_str().is_empty()
}
