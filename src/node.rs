//! The tree entity.
//!
//! A [`Node`] holds a key, the raw text of its value, integer and float views
//! derived from that text, and an ordered list of owned children.
//!
//! ## Building trees
//!
//! ```rust
//! use valtree::Node;
//!
//! let mut root = Node::empty();
//! root.add_child(Node::new("name", "probe"));
//! root.add_tree("engine.thrust", "4500");
//!
//! assert_eq!(root.len(), 2);
//! assert_eq!(root.query("engine.thrust").map(Node::as_i64), Some(4500));
//! ```
//!
//! ## Lookups
//!
//! Lookups return `None` when nothing matches:
//!
//! ```rust
//! use valtree::Node;
//!
//! let mut root = Node::empty();
//! root.add_child(Node::new("a", "1"));
//! assert!(root.query("a.b.c").is_none());
//! assert!(root.child("missing").is_none());
//! ```

use crate::map::PathMap;
use crate::number::{parse_float, parse_int};
use crate::path;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A key, a raw value with derived numeric views, and ordered children.
///
/// The numeric views always match the raw value: every write to the value
/// recomputes them.
///
/// # Examples
///
/// ```rust
/// use valtree::Node;
///
/// let node = Node::new("speed", "42");
/// assert_eq!(node.as_str(), "42");
/// assert_eq!(node.as_i64(), 42);
/// assert_eq!(node.as_f64(), 42.0);
///
/// let node = Node::new("speed", "fast");
/// assert_eq!(node.as_i64(), 0);
/// assert_eq!(node.as_f64(), 0.0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "NodeRepr")]
pub struct Node {
    key: String,
    #[serde(rename = "value")]
    raw_value: String,
    #[serde(skip)]
    int_value: i64,
    #[serde(skip)]
    float_value: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

#[derive(Deserialize)]
struct NodeRepr {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    children: Vec<Node>,
}

impl From<NodeRepr> for Node {
    fn from(repr: NodeRepr) -> Self {
        let mut node = Node::new(repr.key, repr.value);
        node.children = repr.children;
        node
    }
}

impl Node {
    /// Creates a childless node from a key/value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut node = Node {
            key: key.into(),
            ..Node::default()
        };
        node.set_value(value);
        node
    }

    /// Creates a node with no key, no value and no children.
    #[must_use]
    pub fn empty() -> Self {
        Node::default()
    }

    /// Removes the key, value and all children.
    pub fn clear(&mut self) {
        *self = Node::default();
    }

    /// Returns `true` when the node has no key, no value and no children.
    ///
    /// This is the "empty node" test, not "has no children": a keyed leaf is
    /// not empty even though its [`len`](Node::len) is `0`. Use
    /// [`has_children`](Node::has_children) to ask about children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::Node;
    ///
    /// let mut node = Node::empty();
    /// assert!(node.is_empty());
    /// node.add_child(Node::empty());
    /// assert!(!node.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.raw_value.is_empty() && self.children.is_empty()
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw value text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw_value
    }

    /// Integer view of the value; `0` when the value does not start with a number.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.int_value
    }

    /// Float view of the value; `0.0` when the value does not start with a number.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.float_value
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.key = key.into();
        self.set_value(value);
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
        self.value_changed();
    }

    /// Stores `value` as decimal text.
    pub fn set_i64(&mut self, value: i64) {
        self.set_value(value.to_string());
    }

    /// Stores `value` using the shortest text that reads back as the same float.
    pub fn set_f64(&mut self, value: f64) {
        self.set_value(value.to_string());
    }

    fn value_changed(&mut self) {
        self.int_value = parse_int(&self.raw_value);
        self.float_value = parse_float(&self.raw_value);
    }

    /// Splits the value on `delimiter`, dropping empty pieces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::Node;
    ///
    /// let node = Node::new("tags", "red,,green,");
    /// assert_eq!(node.split_str(','), vec!["red", "green"]);
    /// ```
    #[must_use]
    pub fn split_str(&self, delimiter: char) -> Vec<&str> {
        self.raw_value
            .split(delimiter)
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    /// Integer view of each delimited piece.
    ///
    /// Without a delimiter in the value this is the single integer view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::Node;
    ///
    /// assert_eq!(Node::new("l", "90,90").split_i64(','), vec![90, 90]);
    /// assert_eq!(Node::new("l", "7").split_i64(','), vec![7]);
    /// ```
    #[must_use]
    pub fn split_i64(&self, delimiter: char) -> Vec<i64> {
        if !self.raw_value.contains(delimiter) {
            return vec![self.int_value];
        }
        self.split_str(delimiter).into_iter().map(parse_int).collect()
    }

    /// Float view of each delimited piece.
    ///
    /// Without a delimiter in the value this is the single float view.
    #[must_use]
    pub fn split_f64(&self, delimiter: char) -> Vec<f64> {
        if !self.raw_value.contains(delimiter) {
            return vec![self.float_value];
        }
        self.split_str(delimiter).into_iter().map(parse_float).collect()
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    #[must_use]
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    #[must_use]
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    #[must_use]
    pub fn child_at(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// First direct child whose key equals `key`.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.key == key)
    }

    pub fn child_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|child| child.key == key)
    }

    /// Resolves a dot-separated path of child keys starting at this node.
    ///
    /// An empty path resolves to `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::from_str;
    ///
    /// let tree = from_str("window\n\tsize\n\t\twidth 640\n").tree;
    /// assert_eq!(tree.query("window.size.width").map(|n| n.as_i64()), Some(640));
    /// assert_eq!(tree.query(".window..size.").map(|n| n.len()), Some(1));
    /// assert!(tree.query("window.height").is_none());
    /// ```
    #[must_use]
    pub fn query(&self, path: &str) -> Option<&Node> {
        path::segments(path).try_fold(self, |node, key| node.child(key))
    }

    pub fn query_mut(&mut self, path: &str) -> Option<&mut Node> {
        path::segments(path).try_fold(self, |node, key| node.child_mut(key))
    }

    /// Appends `child` as the last child and returns it.
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Walks `path`, creating any missing nodes, and sets the value of the last one.
    ///
    /// Existing nodes along the path are reused, so repeating the call with a
    /// different value only overwrites the leaf. A path without any segments
    /// sets the value of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::Node;
    ///
    /// let mut root = Node::empty();
    /// root.add_tree("x.y.z", "9");
    /// root.add_tree("x.y.z", "10");
    ///
    /// assert_eq!(root.len(), 1);
    /// assert_eq!(root.query("x.y").map(Node::len), Some(1));
    /// assert_eq!(root.query("x.y.z").map(Node::as_i64), Some(10));
    /// ```
    pub fn add_tree(&mut self, path: &str, value: impl Into<String>) -> &mut Node {
        let mut current = self;
        for key in path::segments(path) {
            let index = match current.children.iter().position(|child| child.key == key) {
                Some(index) => index,
                None => {
                    current.children.push(Node::new(key, ""));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[index];
        }
        current.set_value(value);
        current
    }

    /// Ordered map from the dot-path of every keyed descendant to its raw value.
    #[must_use]
    pub fn flatten(&self) -> PathMap {
        PathMap::from_node(self)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.raw_value == other.raw_value
            && self.children == other.children
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl IntoIterator for Node {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl Extend<Node> for Node {
    fn extend<T: IntoIterator<Item = Node>>(&mut self, iter: T) {
        self.children.extend(iter);
    }
}

/// Collects nodes as the children of an empty root.
impl FromIterator<Node> for Node {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        let mut root = Node::empty();
        root.extend(iter);
        root
    }
}
