//! Record extraction.
//!
//! [`Records`] turns a text buffer into the ordered `(depth, key, value)`
//! records the tree builder consumes. Blank lines and full-line comments
//! produce nothing. Records borrow from the input buffer.

use crate::lexer::{is_whitespace, Lexer, Line};
use crate::options::ParseOptions;

/// One qualifying line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// 1-based source line.
    pub line: usize,
    /// Count of leading whitespace characters.
    pub depth: usize,
    /// First whitespace-delimited token after the indentation. A comment
    /// marker inside it is part of the key.
    pub key: &'a str,
    /// Remainder after the key up to the comment marker or line end.
    ///
    /// Trailing whitespace is trimmed even when no comment follows, so
    /// `"a 1  "` reads as `"1"`, not `"1  "`.
    pub value: &'a str,
}

/// Lazily extracts records from a buffer, honouring the size guard.
///
/// Once a line would end past `max_size` the iterator stops and
/// [`Records::truncated`] reports `true`. Records already yielded stay valid.
///
/// # Examples
///
/// ```rust
/// use valtree::record::Records;
///
/// let input = "// header\nspeed 12 // max speed\n\n\tunit km/h\n";
/// let records: Vec<_> = Records::new(input).map(|r| (r.depth, r.key, r.value)).collect();
/// assert_eq!(records, vec![(0, "speed", "12"), (1, "unit", "km/h")]);
/// ```
#[derive(Debug, Clone)]
pub struct Records<'a> {
    lexer: Lexer<'a>,
    max_size: usize,
    truncated: bool,
}

impl<'a> Records<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    #[must_use]
    pub fn with_options(input: &'a str, options: &ParseOptions) -> Self {
        Records {
            lexer: Lexer::new(input),
            max_size: options.max_size,
            truncated: false,
        }
    }

    /// Whether extraction stopped at the size guard.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.lexer.position()
    }

    fn record(&self, line: &Line) -> Option<Record<'a>> {
        let depth = line.depth()?;
        let bytes = self.lexer.input().as_bytes();

        let key_start = line.indent_end;
        let mut key_end = key_start;
        while key_end < line.end && !is_whitespace(bytes[key_end]) {
            key_end += 1;
        }
        if key_end == key_start {
            return None;
        }

        let mut value_start = key_end;
        while value_start < line.end && is_whitespace(bytes[value_start]) {
            value_start += 1;
        }
        let mut value_end = self
            .lexer
            .find_comment(value_start, line.end)
            .unwrap_or(line.end);
        while value_end > value_start && is_whitespace(bytes[value_end - 1]) {
            value_end -= 1;
        }

        Some(Record {
            line: line.number,
            depth,
            key: self.lexer.slice(key_start, key_end)?,
            value: self.lexer.slice(value_start, value_end)?,
        })
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        if self.truncated {
            return None;
        }

        loop {
            let line = self.lexer.peek_line()?;
            if line.next > self.max_size {
                self.truncated = true;
                return None;
            }
            self.lexer.next();

            if line.is_blank() || line.is_comment() {
                log::trace!("skipping line {}", line.number);
                continue;
            }
            if let Some(record) = self.record(&line) {
                return Some(record);
            }
        }
    }
}
