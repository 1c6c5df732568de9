//! Error types for the bibtex-entries crate

use std::fmt;
use thiserror::Error;

/// Result type for bibtex-entries operations
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum number of characters of remaining input kept in an error
const SNIPPET_LEN: usize = 40;

/// The main error type for bibtex-entries
///
/// Every syntax variant carries the [`Location`] the failing rule was positioned
/// at and a snippet of the input remaining from there. A parse stops at the
/// first error; nothing parsed before it is returned.
#[derive(Error, Debug)]
pub enum Error {
    /// An expected literal was not found at the cursor
    #[error("Token mismatch at {location}: expected '{expected}', found '{found}'")]
    TokenMismatch {
        /// The literal that was required
        expected: String,
        /// Snippet of the input at the cursor
        found: String,
        /// Where the mismatch happened
        location: Location,
    },

    /// A braced or quoted value ran off the end of the input
    #[error("Unterminated {kind} value at {location}: '{found}'")]
    UnterminatedValue {
        /// Which delimiter family was left open
        kind: ValueKind,
        /// Snippet of the input starting at the value's content
        found: String,
        /// Where the value's content starts
        location: Location,
    },

    /// A key lexeme ran off the end of the input
    #[error("Runaway key at {location}: '{found}'")]
    RunawayKey {
        /// Snippet of the input starting at the key
        found: String,
        /// Where the key starts
        location: Location,
    },

    /// A `key = value` pair lacked its equals sign
    #[error("Equals sign missing after '{key}' at {location}: found '{found}'")]
    MissingEquals {
        /// The (uppercased) key that was read
        key: String,
        /// Snippet of the input after the key
        found: String,
        /// Where the equals sign was expected
        location: Location,
    },

    /// A bare token was neither a defined macro nor a number
    #[error("Value expected at {location}: found '{found}'")]
    ValueExpected {
        /// Snippet of the input starting at the token
        found: String,
        /// Where the token starts
        location: Location,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Location of a syntax error, `None` for I/O failures
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        match self {
            Self::TokenMismatch { location, .. }
            | Self::UnterminatedValue { location, .. }
            | Self::RunawayKey { location, .. }
            | Self::MissingEquals { location, .. }
            | Self::ValueExpected { location, .. } => Some(*location),
            Self::IoError(_) => None,
        }
    }

    /// Whether this error was raised by the grammar
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        !matches!(self, Self::IoError(_))
    }
}

/// Delimiter family of an unterminated value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `{ ... }`
    Brace,
    /// `" ... "`
    Quote,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brace => write!(f, "brace"),
            Self::Quote => write!(f, "quote"),
        }
    }
}

/// Location information for errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Byte offset into the input
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in characters (1-indexed)
    pub column: usize,
}

impl Location {
    /// Compute the line and column of a byte offset in `input`
    ///
    /// `offset` must lie on a char boundary.
    #[must_use]
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let before = &input.as_bytes()[..offset];
        let line = memchr::memchr_iter(b'\n', before).count() + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
        let column = input[line_start..offset].chars().count() + 1;

        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Get a snippet of input for error messages
pub(crate) fn snippet(rest: &str) -> String {
    let mut chars = rest.chars();
    let snippet: String = chars.by_ref().take(SNIPPET_LEN).collect();
    if chars.next().is_some() {
        format!("{snippet}...")
    } else {
        snippet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_offset() {
        let input = "@misc{a,\n  b = 1,\n  ü = x}";
        assert_eq!(
            Location::from_offset(input, 0),
            Location {
                offset: 0,
                line: 1,
                column: 1
            }
        );

        let offset = input.find('=').unwrap();
        let loc = Location::from_offset(input, offset);
        assert_eq!((loc.line, loc.column), (2, 5));

        // Columns count characters, not bytes
        let offset = input.rfind('=').unwrap();
        let loc = Location::from_offset(input, offset);
        assert_eq!((loc.line, loc.column), (3, 5));
    }

    #[test]
    fn test_snippet_truncation() {
        assert_eq!(snippet("short"), "short");

        let long = "x".repeat(50);
        let s = snippet(&long);
        assert_eq!(s, format!("{}...", "x".repeat(40)));

        assert_eq!(snippet(&"y".repeat(40)), "y".repeat(40));
    }

    #[test]
    fn test_error_display_mentions_location() {
        let err = Error::TokenMismatch {
            expected: ",".to_string(),
            found: "}".to_string(),
            location: Location {
                offset: 7,
                line: 1,
                column: 8,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("Token mismatch"));
        assert!(msg.contains("line 1, column 8"));
        assert!(err.is_syntax());
        assert_eq!(err.location().map(|l| l.offset), Some(7));
    }

    #[test]
    fn test_io_error_has_no_location() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!err.is_syntax());
        assert_eq!(err.location(), None);
    }
}
