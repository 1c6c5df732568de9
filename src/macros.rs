//! String macros (`@string` definitions and the predefined month names)

use ahash::AHashMap;

/// Month abbreviations every fresh table starts with
pub const MONTHS: [(&str, &str); 12] = [
    ("JAN", "January"),
    ("FEB", "February"),
    ("MAR", "March"),
    ("APR", "April"),
    ("MAY", "May"),
    ("JUN", "June"),
    ("JUL", "July"),
    ("AUG", "August"),
    ("SEP", "September"),
    ("OCT", "October"),
    ("NOV", "November"),
    ("DEC", "December"),
];

/// Macro environment consulted when a bare value is parsed
///
/// Names are case-insensitive and stored uppercase. The table only grows
/// while parsing: a macro is visible to every value parsed after its
/// definition, and to none before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroTable {
    macros: AHashMap<String, String>,
}

impl Default for MacroTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroTable {
    /// Create a table holding the twelve month abbreviations
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (name, value) in MONTHS {
            table.define(name, value);
        }
        table
    }

    /// Create a table without any predefined macros
    #[must_use]
    pub fn empty() -> Self {
        Self {
            macros: AHashMap::new(),
        }
    }

    /// Define (or redefine) a macro
    ///
    /// Returns the previous expansion if the name was already defined.
    pub fn define(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.macros.insert(name.to_uppercase(), value.into())
    }

    /// Look up a macro by name (case-insensitive)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.macros.get(&name.to_uppercase()).map(String::as_str)
    }

    /// Check whether a macro is defined
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(&name.to_uppercase())
    }

    /// Number of defined macros
    #[must_use]
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    /// Whether no macros are defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Iterate over `(NAME, expansion)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.macros.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
