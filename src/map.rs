//! Flattened view of a tree.
//!
//! This module provides [`PathMap`], a wrapper around [`IndexMap`] that maps
//! the dot-path of each keyed node to its raw value, in pre-order. It is a
//! convenient shape for diffing, lookup tables and JSON export.
//!
//! ## Limits
//!
//! - Nodes without a key cannot be addressed by a path; they and their
//!   subtrees are left out.
//! - When two siblings share a key, the later value wins but the entry keeps
//!   the position of the first.
//! - Keys containing `.` split into several segments on the way back.
//!
//! ## Examples
//!
//! ```rust
//! use valtree::{from_str, PathMap};
//!
//! let tree = from_str("window\n\twidth 640\n\theight 480\n").tree;
//! let map = tree.flatten();
//!
//! let paths: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(paths, vec!["window", "window.width", "window.height"]);
//! assert_eq!(map.get("window.width"), Some("640"));
//!
//! assert_eq!(map.into_node(), tree);
//! ```

use crate::{path, Node};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered map of dot-paths to raw values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathMap(IndexMap<String, String>);

impl PathMap {
    /// Creates an empty `PathMap`.
    #[must_use]
    pub fn new() -> Self {
        PathMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PathMap(IndexMap::with_capacity(capacity))
    }

    /// Collects every keyed descendant of `root` in pre-order.
    #[must_use]
    pub fn from_node(root: &Node) -> Self {
        let mut map = PathMap::new();
        let mut stack: Vec<(String, &Node)> = root
            .children()
            .iter()
            .rev()
            .map(|child| (String::new(), child))
            .collect();

        while let Some((parent, node)) = stack.pop() {
            if node.key().is_empty() {
                continue;
            }
            let full = path::join(&parent, node.key());
            map.insert(full.clone(), node.as_str().to_string());
            stack.extend(node.children().iter().rev().map(|child| (full.clone(), child)));
        }
        map
    }

    /// Rebuilds a tree under an empty root, creating each path in map order.
    #[must_use]
    pub fn into_node(self) -> Node {
        let mut root = Node::empty();
        for (path, value) in self.0 {
            root.add_tree(&path, value);
        }
        root
    }

    /// Inserts a path/value pair, returning the previous value for that path.
    pub fn insert(&mut self, path: String, value: String) -> Option<String> {
        self.0.insert(path, value)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the paths, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the path/value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl IntoIterator for PathMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, String)> for PathMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        PathMap(IndexMap::from_iter(iter))
    }
}

impl From<&Node> for PathMap {
    fn from(node: &Node) -> Self {
        PathMap::from_node(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preorder_paths() {
        let mut root = Node::empty();
        root.add_tree("a.b", "1");
        root.add_tree("c", "2");
        root.add_tree("a.d", "3");

        let pairs: Vec<_> = root
            .flatten()
            .into_iter()
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), String::new()),
                ("a.b".to_string(), "1".to_string()),
                ("a.d".to_string(), "3".to_string()),
                ("c".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyless_nodes_are_skipped() {
        let mut root = Node::empty();
        let mut anonymous = Node::new("", "v");
        anonymous.add_child(Node::new("hidden", "1"));
        root.add_child(anonymous);
        root.add_child(Node::new("shown", "2"));

        let map = PathMap::from(&root);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("shown"), Some("2"));
        assert!(map.get("hidden").is_none());
    }

    #[test]
    fn test_duplicate_siblings_keep_last_value() {
        let mut root = Node::empty();
        root.add_child(Node::new("k", "first"));
        root.add_child(Node::new("k", "second"));
        let map = root.flatten();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some("second"));
    }

    #[test]
    fn test_into_node_builds_paths() {
        let map: PathMap = vec![
            ("x.y.z".to_string(), "9".to_string()),
            ("x.w".to_string(), "1".to_string()),
        ]
        .into_iter()
        .collect();

        let root = map.into_node();
        assert_eq!(root.len(), 1);
        assert_eq!(root.query("x.y.z").map(Node::as_i64), Some(9));
        assert_eq!(root.query("x.w").map(Node::as_i64), Some(1));
    }

    #[test]
    fn test_empty_tree_flattens_to_empty_map() {
        assert!(Node::empty().flatten().is_empty());
        assert!(PathMap::new().into_node().is_empty());
    }
}
