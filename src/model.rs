//! Data models for BibTeX entries

use ahash::AHashMap;
use std::fmt;

/// Field holding the citation key exactly as written
pub const BIBTEXKEY: &str = "BIBTEXKEY";
/// Field holding the human-readable category of a few well-known types
pub const BIBTEXTYPE: &str = "BIBTEXTYPE";
/// Field holding the uppercased directive, `@` included (e.g. `@BOOK`)
pub const BIBTEXTYPEKEY: &str = "BIBTEXTYPEKEY";
/// Field holding the verbatim source text of the entry
pub const BIBTEXRAW: &str = "BIBTEXRAW";

/// Fields synthesized by the parser rather than read from the source
pub const META_FIELDS: [&str; 4] = [BIBTEXKEY, BIBTEXTYPE, BIBTEXTYPEKEY, BIBTEXRAW];

/// A BibTeX entry (article, book, etc.)
///
/// An entry is a map from uppercased field name to resolved text. Besides the
/// fields written in the source it carries the synthesized [`META_FIELDS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Entry {
    fields: AHashMap<String, String>,
}

impl Entry {
    /// Create an entry for `key` with the metadata derived from `directive`
    ///
    /// `directive` is the uppercased directive tag including the `@`.
    #[must_use]
    pub fn new(key: &str, directive: &str) -> Self {
        let mut entry = Self::default();
        entry.set(BIBTEXKEY, key);
        if let Some(category) = EntryType::parse(directive).category() {
            entry.set(BIBTEXTYPE, category);
        }
        entry.set(BIBTEXTYPEKEY, directive);
        entry
    }

    /// Get the citation key as written in the source
    #[must_use]
    pub fn key(&self) -> &str {
        self.get(BIBTEXKEY).unwrap_or_default()
    }

    /// Get the directive tag, e.g. `@ARTICLE`
    #[must_use]
    pub fn entry_type_key(&self) -> &str {
        self.get(BIBTEXTYPEKEY).unwrap_or_default()
    }

    /// Get the entry type
    #[must_use]
    pub fn entry_type(&self) -> EntryType {
        EntryType::parse(self.entry_type_key())
    }

    /// Get the human-readable category, if the type has one
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.get(BIBTEXTYPE)
    }

    /// Get the verbatim source text of the entry
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.get(BIBTEXRAW)
    }

    /// Get a field value by name (case-insensitive)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(value) => Some(value),
            None => self.fields.get(&name.to_uppercase()).map(String::as_str),
        }
    }

    /// Set a field, uppercasing its name
    ///
    /// Returns the previous value of the field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.to_uppercase(), value.into())
    }

    /// Iterate over all `(NAME, value)` pairs, metadata included
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the fields read from the source, metadata excluded
    pub fn user_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields().filter(|(name, _)| !META_FIELDS.contains(name))
    }

    /// Number of fields, metadata included
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the entry has no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying field map
    #[must_use]
    pub const fn as_map(&self) -> &AHashMap<String, String> {
        &self.fields
    }

    /// Consume the entry, returning its field map
    #[must_use]
    pub fn into_map(self) -> AHashMap<String, String> {
        self.fields
    }
}

impl From<AHashMap<String, String>> for Entry {
    fn from(fields: AHashMap<String, String>) -> Self {
        Self { fields }
    }
}

/// BibTeX entry type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Article from a journal
    Article,
    /// Book with publisher
    Book,
    /// Printed and bound work without a named publisher
    Booklet,
    /// Part of a book
    InBook,
    /// Part of a book with its own title
    InCollection,
    /// Article in conference proceedings
    InProceedings,
    /// Technical documentation
    Manual,
    /// Master's thesis
    MastersThesis,
    /// `PhD` thesis
    PhdThesis,
    /// Conference proceedings
    Proceedings,
    /// Technical report
    TechReport,
    /// Unpublished work
    Unpublished,
    /// Miscellaneous
    Misc,
    /// Custom entry type, stored uppercase without the `@`
    Custom(String),
}

impl EntryType {
    /// Parse from a type name, with or without the leading `@` (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let name = s.strip_prefix('@').unwrap_or(s).to_uppercase();
        match name.as_str() {
            "ARTICLE" => Self::Article,
            "BOOK" => Self::Book,
            "BOOKLET" => Self::Booklet,
            "INBOOK" => Self::InBook,
            "INCOLLECTION" => Self::InCollection,
            "INPROCEEDINGS" => Self::InProceedings,
            "MANUAL" => Self::Manual,
            "MASTERSTHESIS" => Self::MastersThesis,
            "PHDTHESIS" => Self::PhdThesis,
            "PROCEEDINGS" => Self::Proceedings,
            "TECHREPORT" => Self::TechReport,
            "UNPUBLISHED" => Self::Unpublished,
            "MISC" => Self::Misc,
            _ => Self::Custom(name),
        }
    }

    /// Category text stored in `BIBTEXTYPE`
    ///
    /// Only four types have one.
    #[must_use]
    pub const fn category(&self) -> Option<&'static str> {
        match self {
            Self::InCollection => Some("book chapter"),
            Self::InProceedings => Some("conference, workshop"),
            Self::Article => Some("journal"),
            Self::TechReport => Some("technical report"),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => write!(f, "article"),
            Self::Book => write!(f, "book"),
            Self::Booklet => write!(f, "booklet"),
            Self::InBook => write!(f, "inbook"),
            Self::InCollection => write!(f, "incollection"),
            Self::InProceedings => write!(f, "inproceedings"),
            Self::Manual => write!(f, "manual"),
            Self::MastersThesis => write!(f, "mastersthesis"),
            Self::PhdThesis => write!(f, "phdthesis"),
            Self::Proceedings => write!(f, "proceedings"),
            Self::TechReport => write!(f, "techreport"),
            Self::Unpublished => write!(f, "unpublished"),
            Self::Misc => write!(f, "misc"),
            Self::Custom(s) => write!(f, "{}", s.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_metadata() {
        let entry = Entry::new("Knuth84", "@ARTICLE");
        assert_eq!(entry.key(), "Knuth84");
        assert_eq!(entry.entry_type_key(), "@ARTICLE");
        assert_eq!(entry.entry_type(), EntryType::Article);
        assert_eq!(entry.category(), Some("journal"));
        assert_eq!(entry.raw(), None);
        assert_eq!(entry.len(), 3);
    }

    #[test]
    fn test_unknown_type_has_no_category() {
        let entry = Entry::new("x", "@BOOK");
        assert_eq!(entry.category(), None);
        assert_eq!(entry.get(BIBTEXTYPE), None);

        let entry = Entry::new("y", "@ONLINE");
        assert_eq!(entry.entry_type(), EntryType::Custom("ONLINE".to_string()));
        assert_eq!(entry.entry_type().to_string(), "online");
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let mut entry = Entry::new("k", "@MISC");
        entry.set("title", "On Computable Numbers");
        assert_eq!(entry.get("TITLE"), Some("On Computable Numbers"));
        assert_eq!(entry.get("Title"), Some("On Computable Numbers"));

        let user: Vec<_> = entry.user_fields().collect();
        assert_eq!(user, vec![("TITLE", "On Computable Numbers")]);
    }

    #[test]
    fn test_field_map_conversions() {
        let mut entry = Entry::new("k", "@BOOK");
        entry.set("publisher", "Springer");
        assert_eq!(entry.as_map().get("PUBLISHER").map(String::as_str), Some("Springer"));
        assert_eq!(entry.as_map().len(), entry.len());

        let map = entry.clone().into_map();
        assert_eq!(map.get(BIBTEXKEY).map(String::as_str), Some("k"));

        let rebuilt = Entry::from(map);
        assert_eq!(rebuilt, entry);
        assert_eq!(rebuilt.entry_type(), EntryType::Book);
    }

    #[test]
    fn test_entry_type_parse() {
        assert_eq!(EntryType::parse("@incollection"), EntryType::InCollection);
        assert_eq!(EntryType::parse("TechReport"), EntryType::TechReport);
        assert_eq!(
            EntryType::parse("conference"),
            EntryType::Custom("CONFERENCE".to_string())
        );
        assert_eq!(EntryType::InCollection.category(), Some("book chapter"));
        assert_eq!(
            EntryType::InProceedings.category(),
            Some("conference, workshop")
        );
        assert_eq!(EntryType::TechReport.category(), Some("technical report"));
    }
}
