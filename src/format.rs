//! Value Tree Text Format
//!
//! This module documents the line-oriented text format read and written by
//! this crate. It contains no code.
//!
//! # Overview
//!
//! Every non-blank line holds one node. Indentation decides nesting; there
//! are no brackets, quotes or escapes.
//!
//! ```text
//! <indentation><key><whitespace><value>[// comment]
//! ```
//!
//! ## Example
//!
//! ```text
//! // ship configuration
//! name        Endeavour
//! speed       12          // max speed
//! crew
//!     captain     Hale
//!     pilots      Ames,Ortiz
//! hull
//!     armor       3.5
//! ```
//!
//! # Lines
//!
//! | Part | Rule |
//! |------|------|
//! | Indentation | Any run of spaces and tabs. Its length in characters is the line's depth. |
//! | Key | The first token after the indentation, up to whitespace. A `//` inside the key is part of it. |
//! | Value | The rest of the line after the key and its separating whitespace, up to a comment or the line end. Trailing whitespace is dropped even without a comment; inner whitespace is kept. |
//! | Comment | Starts at the first `//` after the key (or at the start of the content) and runs to the line end. |
//! | Terminator | `\n`, `\r` or `\r\n`, freely mixed. |
//!
//! Blank lines and lines whose first non-whitespace content is `//` are
//! ignored: they produce no node and their depth is never considered.
//!
//! Tabs and spaces both count as one character of depth. Mixing them is
//! allowed, but `\t` and `    ` are different depths.
//!
//! # Nesting
//!
//! A line deeper than the currently open node becomes its child, however large
//! the jump. A line at the same or a smaller depth closes open nodes until it
//! reaches a shallower one, and becomes that node's next child.
//!
//! ```text
//! a               // depth 0: child of the root
//!     b           // depth 4: child of a
//!     c           // depth 4: closes b, child of a
//!   d             // depth 2: closes c, still deeper than a: child of a
//! e               // depth 0: closes d and a, child of the root
//! ```
//!
//! A partial dedent does not return to the root: in the example, `d` is
//! shallower than `b` and `c` but deeper than `a`, so it joins `a` as a third
//! child rather than becoming a sibling of `a`. Only a line at depth 0 (or at
//! most `a`'s depth) starts a new top-level node.
//!
//! # Values
//!
//! Values are text. Each node also carries an integer and a float view read
//! from the leading number of its value, with `0` / `0.0` when there is none:
//!
//! | Value | Integer view | Float view |
//! |-------|--------------|------------|
//! | `42` | `42` | `42.0` |
//! | `2.75` | `2` | `2.75` |
//! | `12px` | `12` | `12.0` |
//! | `abc` | `0` | `0.0` |
//!
//! Lists are delimited text, for example `90,90`, and are read with
//! [`Node::split_str`](crate::Node::split_str),
//! [`Node::split_i64`](crate::Node::split_i64) and
//! [`Node::split_f64`](crate::Node::split_f64).
//!
//! # Paths
//!
//! Nodes are addressed with dot-separated keys, for example `crew.captain`.
//! Empty segments from leading, trailing or doubled dots are skipped. The first
//! child with a matching key is followed at every step.
//!
//! # Writing
//!
//! The serializer writes one line per node with a key or value, indented by
//! one tab per level (configurable through
//! [`WriteOptions`](crate::WriteOptions)), followed by the key, a single
//! separator and the value. Comments and blank lines are not preserved.
//!
//! Text survives a write/read cycle unchanged as long as keys are non-empty
//! and contain no whitespace, and values contain no `//`, no line terminators
//! and carry no trailing whitespace.
//!
//! # Limits
//!
//! Parsing stops at the first line that ends past the size guard
//! ([`DEFAULT_MAX_SIZE`](crate::DEFAULT_MAX_SIZE), 8 MiB, by default). The
//! nodes read so far are returned and the result is marked truncated.
//! Nesting depth is bounded only by the size guard.
