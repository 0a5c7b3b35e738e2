//! Line scanner for the value tree format.
//!
//! The lexer walks a text buffer one physical line at a time and reports byte
//! offsets for the interesting boundaries of each line:
//!
//! ```text
//!     speed 12  // max speed\r\n
//! ^   ^         ^           ^   ^
//! |   |         |           |   next
//! |   |         comment     end
//! |   indent_end
//! start
//! ```
//!
//! Whitespace is space and tab. `\n`, `\r` and `\r\n` each terminate one line.
//! [`Line::comment`] is the first [`COMMENT_MARKER`] on the line, which is
//! what decides full-line comments. Inside a key the marker is plain text, so
//! record extraction searches for the trailing comment after the key with
//! [`Lexer::find_comment`].

/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: &str = "//";

/// Returns `true` for the whitespace characters used for indentation and separation.
#[inline]
#[must_use]
pub const fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Returns `true` for line terminator bytes.
#[inline]
#[must_use]
pub const fn is_line_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Offsets of a single scanned line. All offsets index into the lexer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    pub start: usize,
    /// First non-whitespace byte, or `end` for a blank line.
    pub indent_end: usize,
    /// Start of the comment marker, if the line has one.
    pub comment: Option<usize>,
    /// Offset of the line terminator (or the end of input).
    pub end: usize,
    /// Offset where the following line begins.
    pub next: usize,
}

impl Line {
    /// Number of leading whitespace characters, or `None` for a blank line.
    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        if self.is_blank() {
            None
        } else {
            Some(self.indent_end - self.start)
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.indent_end >= self.end
    }

    /// A line whose first content is the comment marker.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.comment.is_some_and(|c| c <= self.indent_end)
    }

    /// End of the usable content: the comment marker or the terminator.
    #[must_use]
    pub fn content_end(&self) -> usize {
        self.comment.unwrap_or(self.end)
    }
}

/// Iterator over the lines of a text buffer.
///
/// # Examples
///
/// ```rust
/// use valtree::lexer::Lexer;
///
/// let lines: Vec<_> = Lexer::new("a 1\r\n\tb 2 // note").collect();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].depth(), Some(0));
/// assert_eq!(lines[1].depth(), Some(1));
/// assert_eq!(lines[1].comment, Some(10));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
        }
    }

    /// The buffer being scanned.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Offset of the next line to be scanned.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text between two offsets of the input, or `None` if the
    /// range is out of bounds or not on character boundaries.
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> Option<&'a str> {
        self.input.get(from..to)
    }

    /// Start of the first comment marker in `from..to`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::lexer::Lexer;
    ///
    /// let lexer = Lexer::new("a//b c // d");
    /// assert_eq!(lexer.find_comment(0, 11), Some(1));
    /// assert_eq!(lexer.find_comment(4, 11), Some(7));
    /// assert_eq!(lexer.find_comment(4, 6), None);
    /// ```
    #[must_use]
    pub fn find_comment(&self, from: usize, to: usize) -> Option<usize> {
        let marker = COMMENT_MARKER.as_bytes();
        self.input
            .as_bytes()
            .get(from..to)?
            .windows(marker.len())
            .position(|window| window == marker)
            .map(|offset| from + offset)
    }

    /// Scans the line beginning at the current position without consuming it.
    #[must_use]
    pub fn peek_line(&self) -> Option<Line> {
        if self.at_end() {
            return None;
        }
        Some(self.scan_line(self.position))
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn scan_line(&self, start: usize) -> Line {
        let bytes = self.input.as_bytes();
        let len = bytes.len();

        let mut end = start;
        while end < len && !is_line_terminator(bytes[end]) {
            end += 1;
        }

        let mut indent_end = start;
        while indent_end < end && is_whitespace(bytes[indent_end]) {
            indent_end += 1;
        }

        let comment = self.find_comment(start, end);

        let next = match bytes.get(end) {
            Some(b'\r') if bytes.get(end + 1) == Some(&b'\n') => end + 2,
            Some(_) => end + 1,
            None => end,
        };

        Line {
            number: self.line,
            start,
            indent_end,
            comment,
            end,
            next,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let line = self.peek_line()?;
        self.position = line.next;
        self.line += 1;
        Some(line)
    }
}
