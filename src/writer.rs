//! BibTeX writer for serializing entry tables

use crate::parser::scanner::Scanner;
use crate::{Entry, EntryTable, Result};
use std::io::{self, Write};

/// Configuration for writing BibTeX
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Indentation string (default: "  ")
    pub indent: String,
    /// Whether to align field values (default: false)
    pub align_values: bool,
    /// Whether to sort entries by key (default: true)
    pub sort_entries: bool,
    /// Whether to sort fields within entries (default: true)
    pub sort_fields: bool,
    /// Whether to write type and field names in lowercase (default: true)
    pub lowercase_names: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            align_values: false,
            sort_entries: true,
            sort_fields: true,
            lowercase_names: true,
        }
    }
}

/// BibTeX writer
///
/// Values are written in braces exactly as they were resolved, or in quotes
/// when their braces do not balance. The synthesized metadata fields are not
/// written back.
#[derive(Debug)]
pub struct Writer<W: Write> {
    writer: W,
    config: WriterConfig,
}

impl<W: Write> Writer<W> {
    /// Create a new writer with default configuration
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            config: WriterConfig::default(),
        }
    }

    /// Create a new writer with custom configuration
    pub const fn with_config(writer: W, config: WriterConfig) -> Self {
        Self { writer, config }
    }

    /// Write a complete table
    pub fn write_table(&mut self, table: &EntryTable) -> io::Result<()> {
        let mut entries: Vec<(&str, &Entry)> = table.iter().collect();
        if self.config.sort_entries {
            entries.sort_by_key(|(key, _)| *key);
        }

        for (i, (key, entry)) in entries.into_iter().enumerate() {
            if i > 0 {
                writeln!(self.writer)?;
            }
            self.write_entry(key, entry)?;
        }

        Ok(())
    }

    /// Write a single entry under `key`
    pub fn write_entry(&mut self, key: &str, entry: &Entry) -> io::Result<()> {
        let tag = entry.entry_type_key();
        let tag = tag.strip_prefix('@').unwrap_or(tag);
        writeln!(self.writer, "@{}{{{key},", self.name(tag))?;

        let mut fields: Vec<(&str, &str)> = entry.user_fields().collect();
        if self.config.sort_fields {
            fields.sort_unstable();
        }

        let max_name_len = if self.config.align_values {
            fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0)
        } else {
            0
        };

        for (i, (name, value)) in fields.iter().enumerate() {
            write!(self.writer, "{}{}", self.config.indent, self.name(name))?;

            if self.config.align_values {
                let padding = max_name_len - name.len();
                write!(self.writer, "{}", " ".repeat(padding))?;
            }

            match Delimiter::for_value(value) {
                Some(Delimiter::Braces) => write!(self.writer, " = {{{value}}}")?,
                Some(Delimiter::Quotes) => write!(self.writer, " = \"{value}\"")?,
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("value of field {name} in entry {key} cannot be delimited"),
                    ));
                }
            }

            if i < fields.len() - 1 {
                writeln!(self.writer, ",")?;
            } else {
                writeln!(self.writer)?;
            }
        }

        writeln!(self.writer, "}}")?;
        Ok(())
    }

    fn name(&self, name: &str) -> String {
        if self.config.lowercase_names {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Braces,
    Quotes,
}

impl Delimiter {
    /// Pick a delimiter the scanner reads back as exactly `value`
    fn for_value(value: &str) -> Option<Self> {
        if Self::Braces.encloses(value) {
            Some(Self::Braces)
        } else if Self::Quotes.encloses(value) {
            Some(Self::Quotes)
        } else {
            None
        }
    }

    fn encloses(self, value: &str) -> bool {
        let (written, content) = match self {
            Self::Braces => {
                let text = format!("{value}}}");
                let mut scanner = Scanner::new(&text);
                let len = scanner.braced_content().map(str::len);
                (text.len(), len)
            }
            Self::Quotes => {
                let text = format!("{value}\"");
                let mut scanner = Scanner::new(&text);
                let len = scanner.quoted_content().map(str::len);
                (text.len(), len)
            }
        };
        matches!(content, Ok(len) if len + 1 == written)
    }
}

/// Convenience function to write a table to a string
pub fn to_string(table: &EntryTable) -> Result<String> {
    let mut buf = Vec::new();
    let mut writer = Writer::new(&mut buf);
    writer.write_table(table)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Convenience function to write a table to a file
pub fn to_file(table: &EntryTable, path: impl AsRef<std::path::Path>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = Writer::new(file);
    writer.write_table(table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BIBTEXRAW;

    fn sample_entry() -> Entry {
        let mut entry = Entry::new("test2023", "@ARTICLE");
        entry.set("author", "John Doe");
        entry.set("title", "Test {Article}");
        entry.set("year", "2023");
        entry.set(BIBTEXRAW, "@ARTICLE{test2023, ...}");
        entry
    }

    #[test]
    fn test_write_entry() {
        let mut buf = Vec::new();
        let mut writer = Writer::new(&mut buf);
        writer.write_entry("test2023", &sample_entry()).unwrap();

        let result = String::from_utf8(buf).unwrap();
        assert_eq!(
            result,
            "@article{test2023,\n  author = {John Doe},\n  title = {Test {Article}},\n  year = {2023}\n}\n"
        );
        assert!(!result.contains("BIBTEX"));
    }

    #[test]
    fn test_write_aligned_uppercase() {
        let config = WriterConfig {
            align_values: true,
            lowercase_names: false,
            ..WriterConfig::default()
        };
        let mut buf = Vec::new();
        let mut writer = Writer::with_config(&mut buf, config);
        writer.write_entry("test2023", &sample_entry()).unwrap();

        let result = String::from_utf8(buf).unwrap();
        assert!(result.starts_with("@ARTICLE{test2023,\n"));
        assert!(result.contains("  YEAR   = {2023}"));
    }

    #[test]
    fn test_unbalanced_value_is_quoted() {
        let mut entry = Entry::new("k", "@MISC");
        entry.set("note", "a}b");
        entry.set("title", r"a{\}");
        entry.set("year", "1999");

        let mut buf = Vec::new();
        Writer::new(&mut buf).write_entry("k", &entry).unwrap();
        let result = String::from_utf8(buf).unwrap();
        assert_eq!(
            result,
            "@misc{k,\n  note = \"a}b\",\n  title = \"a{\\}\",\n  year = {1999}\n}\n"
        );
    }

    #[test]
    fn test_undelimitable_value_is_rejected() {
        let mut entry = Entry::new("k", "@MISC");
        entry.set("note", "say \"hi\"}");

        let mut buf = Vec::new();
        let err = Writer::new(&mut buf).write_entry("k", &entry).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("NOTE"));
    }
}
