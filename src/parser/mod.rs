//! Hand-written recursive-descent BibTeX parser
//!
//! The grammar accepted here:
//!
//! ```text
//! bibtex           := (string | preamble | comment | entry)* ;
//! string           := '@STRING' ('{'|'(') key_equals_value ('}'|')') ;
//! preamble         := '@PREAMBLE' ('{'|'(') value ('}'|')') ;
//! comment          := '@COMMENT' ('{'|'(') <raw text up to '}'> ;
//! entry            := '@' TYPE ('{'|'(') KEY ',' key_value_list ('}'|')') ;
//! key_value_list   := key_equals_value (',' key_equals_value)* [','] ;
//! key_equals_value := KEY '=' value ;
//! value            := single_value ('#' single_value)* ;
//! single_value     := '{' ... '}' | '"' ... '"' | KEY ;
//! KEY              := [A-Za-z0-9_:?./'+*-]+ ;
//! ```
//!
//! Every rule commits as soon as it starts matching; there is no backtracking
//! and the first violated expectation aborts the whole parse.

pub mod entry;
pub mod scanner;
pub mod value;

use crate::macros::MacroTable;
use crate::model::BIBTEXRAW;
use crate::{EntryTable, Result};
use scanner::Scanner;
use std::path::Path;
use tracing::{debug, trace};

/// Top-level construct selected by the uppercased directive name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `@STRING`: defines a macro
    String,
    /// `@PREAMBLE`: parsed and discarded
    Preamble,
    /// `@COMMENT`: skipped without interpretation
    Comment,
    /// Any other name: a bibliography entry with this tag (e.g. `@ARTICLE`)
    Entry(&'a str),
}

impl<'a> Directive<'a> {
    /// Classify an uppercased directive tag, `@` included
    #[must_use]
    pub fn classify(tag: &'a str) -> Self {
        match tag {
            "@STRING" => Self::String,
            "@PREAMBLE" => Self::Preamble,
            "@COMMENT" => Self::Comment,
            _ => Self::Entry(tag),
        }
    }
}

/// Parser configuration with builder pattern
#[derive(Debug, Clone)]
pub struct ParseOptions {
    month_macros: bool,
    macros: Vec<(String, String)>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            month_macros: true,
            macros: Vec::new(),
        }
    }
}

impl ParseOptions {
    /// Create new parse options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the month abbreviations (`jan` .. `dec`) are predefined
    #[must_use]
    pub const fn month_macros(mut self, enabled: bool) -> Self {
        self.month_macros = enabled;
        self
    }

    /// Predefine a macro, as if an `@string` had been parsed before any input
    #[must_use]
    pub fn define(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.macros.push((name.into(), value.into()));
        self
    }

    /// Build the parser
    #[must_use]
    pub fn build(self) -> BibtexParser {
        let mut macros = if self.month_macros {
            MacroTable::new()
        } else {
            MacroTable::empty()
        };
        for (name, value) in self.macros {
            macros.define(&name, value);
        }
        BibtexParser { macros }
    }
}

/// BibTeX parser
///
/// The macro table lives as long as the parser: `@string` definitions made
/// by one [`parse`](BibtexParser::parse) call are visible to later calls.
/// Every call returns a table holding only the entries of its own input.
#[derive(Debug, Clone, Default)]
pub struct BibtexParser {
    macros: MacroTable,
}

impl BibtexParser {
    /// Create a parser with the month macros predefined
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with options
    #[must_use]
    pub fn builder() -> ParseOptions {
        ParseOptions::new()
    }

    /// Get the macro table
    #[must_use]
    pub const fn macros(&self) -> &MacroTable {
        &self.macros
    }

    /// Define a macro for subsequent parses
    pub fn define_macro(&mut self, name: &str, value: impl Into<String>) {
        self.macros.define(name, value);
    }

    /// Parse BibTeX text into a table of entries
    ///
    /// Fails on the first syntax error without returning any entries. Macros
    /// defined before the error stay defined.
    pub fn parse(&mut self, input: &str) -> Result<EntryTable> {
        let mut scanner = Scanner::new(input);
        let mut table = EntryTable::new();

        while scanner.try_match("@") {
            let start = scanner.pos();
            let tag = parse_directive(&mut scanner)?;
            trace!(directive = %tag, offset = start, "parsing directive");

            let close = if scanner.try_match("{") {
                scanner.expect("{")?;
                "}"
            } else {
                scanner.expect("(")?;
                ")"
            };

            let parsed = match Directive::classify(&tag) {
                Directive::String => {
                    let name = entry::parse_string_body(&mut scanner, &mut self.macros)?;
                    debug!(name = %name, "defined string macro");
                    None
                }
                Directive::Preamble => {
                    entry::parse_preamble_body(&mut scanner, &self.macros)?;
                    None
                }
                Directive::Comment => {
                    entry::skip_comment_body(&mut scanner);
                    None
                }
                Directive::Entry(tag) => {
                    Some(entry::parse_entry_body(&mut scanner, &self.macros, tag)?)
                }
            };

            scanner.skip_insignificant();
            let end = scanner.pos() + close.len();
            scanner.expect(close)?;
            if scanner.try_match(",") {
                scanner.expect(",")?;
            }

            // Whatever lies between this directive and the next `@` is ignored
            scanner.seek(end);
            scanner.skip_to(b'@');

            if let Some((key, mut entry)) = parsed {
                entry.set(BIBTEXRAW, &input[start..end]);
                if table.insert(key.as_str(), entry).is_some() {
                    debug!(key = %key, "duplicate citation key, replacing earlier entry");
                }
            }
        }

        debug!(
            entries = table.len(),
            macros = self.macros.len(),
            "parsed bibtex input"
        );
        Ok(table)
    }

    /// Parse a BibTeX file
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<EntryTable> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading bibtex file");
        let content = std::fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// Parse several files in order into one table
    ///
    /// Macros defined in one file are visible in the files after it, and an
    /// entry in a later file replaces an entry with the same key from an
    /// earlier one.
    pub fn parse_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<EntryTable> {
        let mut acc = EntryTable::new();
        for path in paths {
            acc.merge(self.parse_file(path)?);
        }
        Ok(acc)
    }
}

/// Parse `@` and the directive name, returning the uppercased tag
fn parse_directive(scanner: &mut Scanner<'_>) -> Result<String> {
    scanner.expect("@")?;
    let name = scanner.key()?;
    Ok(format!("@{}", name.to_uppercase()))
}
