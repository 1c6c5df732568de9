//! # bibtex-entries
//!
//! A hand-written recursive-descent BibTeX parser that turns `.bib` text into a
//! table of entries keyed by citation key.
//!
//! ## Features
//!
//! - Field values resolved to plain text: braces and quotes stripped, string
//!   macros expanded, `#` concatenations joined
//! - Month abbreviations (`jan` .. `dec`) predefined as macros
//! - `@string`, `@preamble` and `@comment` directives
//! - Every entry keeps its verbatim source text
//! - Errors with line/column locations and the offending input
//!
//! ## Example
//!
//! ```
//! use bibtex_entries::BibtexParser;
//!
//! let input = r#"
//!     @string{ap = "Annalen der Physik"}
//!     @article{einstein1905,
//!         author = "Albert Einstein",
//!         title = {Zur Elektrodynamik bewegter K{\"o}rper},
//!         journal = ap,
//!         month = jun,
//!         year = 1905
//!     }
//! "#;
//!
//! let table = BibtexParser::new().parse(input)?;
//! assert_eq!(table.len(), 1);
//!
//! let entry = table.get("einstein1905").unwrap();
//! assert_eq!(entry.get("author"), Some("Albert Einstein"));
//! assert_eq!(entry.get("journal"), Some("Annalen der Physik"));
//! assert_eq!(entry.get("month"), Some("June"));
//! assert_eq!(entry.category(), Some("journal"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    missing_debug_implementations
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod macros;
pub mod model;
pub mod parser;

mod table;
mod writer;

pub use error::{Error, Location, Result, ValueKind};
pub use macros::MacroTable;
pub use model::{Entry, EntryType};
pub use parser::{BibtexParser, ParseOptions};
pub use table::{EntryTable, TableStats};
pub use writer::{to_file, to_string, Writer, WriterConfig};

/// Re-export of common parser types
pub mod prelude {
    pub use crate::{BibtexParser, Entry, EntryTable, EntryType, Error, Result};
}

/// Parse BibTeX text with a fresh parser
pub fn parse(input: &str) -> Result<EntryTable> {
    BibtexParser::new().parse(input)
}

/// Parse a BibTeX file with a fresh parser
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<EntryTable> {
    BibtexParser::new().parse_file(path)
}
