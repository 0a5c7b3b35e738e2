//! Error types for reading and writing value trees.
//!
//! Parsing itself never fails: malformed lines are skipped, unparsable numbers
//! read as zero and an oversized buffer yields a truncated (but successful)
//! parse. The errors here come from the edges of the crate, where text is read
//! from or written to an I/O stream.
//!
//! ## Examples
//!
//! ```rust
//! use valtree::{from_slice, Error};
//!
//! let result = from_slice(&[b'a', b' ', 0xff]);
//! assert!(matches!(result, Err(Error::InvalidUtf8 { valid_up_to: 2 })));
//! ```

use thiserror::Error;

/// Represents all errors surfaced at the I/O boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 in input after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },
}

impl Error {
    /// Creates an I/O error for reader or writer failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::Error;
    ///
    /// let err = Error::io("broken pipe");
    /// assert_eq!(err.to_string(), "IO error: broken pipe");
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error for input that is not valid UTF-8.
    pub fn invalid_utf8(valid_up_to: usize) -> Self {
        Error::InvalidUtf8 { valid_up_to }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::invalid_utf8(err.valid_up_to())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
