//! Dot-separated paths.
//!
//! A path such as `window.size.width` names a node by walking child keys from
//! a starting node. Empty segments (leading, trailing or doubled separators)
//! are skipped, so `.window..size.` is the same path as `window.size`.

/// Character separating the keys of a path.
pub const SEPARATOR: char = '.';

/// Returns the non-empty segments of `path` in order.
///
/// # Examples
///
/// ```rust
/// use valtree::path::segments;
///
/// let keys: Vec<_> = segments(".a..b.").collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Appends `key` to `parent`, inserting a separator when `parent` is non-empty.
#[must_use]
pub fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{SEPARATOR}{key}")
    }
}
