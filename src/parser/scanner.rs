//! Cursor over the input text
//!
//! Whitespace and `%` line comments between tokens are insignificant: every
//! matching primitive skips them first. Inside braced or quoted values they
//! are ordinary text, so the value scanners work on raw bytes instead.

use crate::error::{snippet, Error, Location, Result, ValueKind};

/// Positional scanner shared by all grammar rules of one parse
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The whole input
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Input from the cursor on
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Whether the cursor reached the end of the input
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Skip whitespace and `%` comments
    ///
    /// A comment runs up to, not past, the next newline. Reaching the end of
    /// the input is not an error.
    pub fn skip_insignificant(&mut self) {
        let bytes = self.input.as_bytes();
        loop {
            while self.pos < bytes.len() && matches!(bytes[self.pos], b' ' | b'\t' | b'\r' | b'\n')
            {
                self.pos += 1;
            }

            if self.pos < bytes.len() && bytes[self.pos] == b'%' {
                self.pos = memchr::memchr(b'\n', &bytes[self.pos..])
                    .map_or(bytes.len(), |nl| self.pos + nl);
            } else {
                break;
            }
        }
    }

    /// Require `literal` as the next token and move past it
    pub fn expect(&mut self, literal: &str) -> Result<()> {
        self.skip_insignificant();
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            self.skip_insignificant();
            Ok(())
        } else {
            Err(Error::TokenMismatch {
                expected: literal.to_string(),
                found: snippet(self.rest()),
                location: self.location(),
            })
        }
    }

    /// Check whether `literal` is the next token
    ///
    /// Insignificant text before the token is skipped, the token itself is
    /// not consumed.
    pub fn try_match(&mut self, literal: &str) -> bool {
        self.skip_insignificant();
        self.rest().starts_with(literal)
    }

    /// Read a key lexeme, returning its text as written
    ///
    /// The lexeme may be empty. Running into the end of the input while
    /// reading it is an error, even if the text read so far is a valid key.
    pub fn key(&mut self) -> Result<&'a str> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        loop {
            if self.pos == bytes.len() {
                return Err(Error::RunawayKey {
                    found: snippet(&self.input[start..]),
                    location: Location::from_offset(self.input, start),
                });
            }
            if is_key_byte(bytes[self.pos]) {
                self.pos += 1;
            } else {
                return Ok(&self.input[start..self.pos]);
            }
        }
    }

    /// Scan the content of a braced value after its opening brace
    ///
    /// Nested braces are counted. A `}` directly preceded by a backslash is
    /// ordinary text, an escaped `{` still opens a group. The cursor is left
    /// on the closing brace.
    pub fn braced_content(&mut self) -> Result<&'a str> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut depth = 0usize;
        loop {
            let Some(&byte) = bytes.get(self.pos) else {
                return Err(self.unterminated(ValueKind::Brace, start));
            };
            match byte {
                b'}' if !self.escaped() => {
                    if depth == 0 {
                        return Ok(&self.input[start..self.pos]);
                    }
                    depth -= 1;
                }
                b'{' => depth += 1,
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// Scan the content of a quoted value after its opening quote
    ///
    /// Braces inside the quotes are counted; a `"` closes the value only
    /// outside of them and when not preceded by a backslash. The cursor is
    /// left on the closing quote.
    pub fn quoted_content(&mut self) -> Result<&'a str> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut depth = 0usize;
        loop {
            let Some(&byte) = bytes.get(self.pos) else {
                return Err(self.unterminated(ValueKind::Quote, start));
            };
            match byte {
                b'"' if depth == 0 && !self.escaped() => {
                    return Ok(&self.input[start..self.pos]);
                }
                b'{' => depth += 1,
                b'}' => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// Move the cursor onto the next `needle`, or to the end of the input
    ///
    /// Returns whether the byte was found.
    pub fn skip_to(&mut self, needle: u8) -> bool {
        match memchr::memchr(needle, &self.input.as_bytes()[self.pos..]) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }

    /// Move the cursor to `pos`
    ///
    /// `pos` must lie on a char boundary within the input.
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos;
    }

    /// Location of the cursor
    #[must_use]
    pub fn location(&self) -> Location {
        Location::from_offset(self.input, self.pos)
    }

    /// Location of an earlier offset
    #[must_use]
    pub fn location_at(&self, pos: usize) -> Location {
        Location::from_offset(self.input, pos)
    }

    /// Whether the byte before the cursor is a backslash
    fn escaped(&self) -> bool {
        self.pos > 0 && self.input.as_bytes()[self.pos - 1] == b'\\'
    }

    fn unterminated(&self, kind: ValueKind, start: usize) -> Error {
        Error::UnterminatedValue {
            kind,
            found: snippet(&self.input[start..]),
            location: Location::from_offset(self.input, start),
        }
    }
}

/// Bytes allowed in keys: `[A-Za-z0-9_:?./'+*-]`
const fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'_' | b':' | b'?' | b'.' | b'/' | b'\'' | b'+' | b'-' | b'*')
}
