//! Keyed table of parsed entries

use crate::Entry;
use ahash::AHashMap;

/// Entries of one or more parses, keyed by citation key
///
/// Keys keep the case they were written with. Inserting an entry under an
/// existing key replaces the earlier one. Iteration order is unspecified;
/// use [`EntryTable::sorted_by`] when an order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct EntryTable {
    entries: AHashMap<String, Entry>,
}

impl EntryTable {
    /// Create a new empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under `key`, returning the entry it replaced
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), entry)
    }

    /// Merge another table into this one, its entries winning on key clashes
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Find an entry by citation key (case-sensitive)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Check whether an entry exists for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, entry)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Iterate over citation keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Find entries by type, given with or without `@` (case-insensitive)
    #[must_use]
    pub fn find_by_type(&self, ty: &str) -> Vec<&Entry> {
        let wanted = ty.strip_prefix('@').unwrap_or(ty);
        self.entries
            .values()
            .filter(|e| {
                let tag = e.entry_type_key();
                tag.strip_prefix('@')
                    .unwrap_or(tag)
                    .eq_ignore_ascii_case(wanted)
            })
            .collect()
    }

    /// Find entries whose `field` contains `value`
    #[must_use]
    pub fn find_by_field(&self, field: &str, value: &str) -> Vec<&Entry> {
        self.entries
            .values()
            .filter(|e| e.get(field).is_some_and(|v| v.contains(value)))
            .collect()
    }

    /// Entries ordered by the text of `field`
    ///
    /// Entries lacking the field come last; ties are broken by citation key.
    #[must_use]
    pub fn sorted_by(&self, field: &str) -> Vec<&Entry> {
        let mut entries: Vec<(&str, &Entry)> = self.iter().collect();
        entries.sort_by(|(ka, a), (kb, b)| match (a.get(field), b.get(field)) {
            (Some(x), Some(y)) => x.cmp(y).then_with(|| ka.cmp(kb)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => ka.cmp(kb),
        });
        entries.into_iter().map(|(_, e)| e).collect()
    }

    /// Get statistics about the table
    #[must_use]
    pub fn stats(&self) -> TableStats {
        let mut type_counts = AHashMap::new();
        for entry in self.entries.values() {
            *type_counts
                .entry(entry.entry_type_key().to_string())
                .or_insert(0) += 1;
        }

        TableStats {
            total_entries: self.entries.len(),
            entries_by_type: type_counts,
        }
    }

    /// Consume the table, returning the underlying map
    #[must_use]
    pub fn into_inner(self) -> AHashMap<String, Entry> {
        self.entries
    }

    /// Render the table as a JSON object of objects
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl IntoIterator for EntryTable {
    type Item = (String, Entry);
    type IntoIter = std::collections::hash_map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Entry)> for EntryTable {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Statistics about a table
#[derive(Debug, Clone)]
pub struct TableStats {
    /// Total number of entries
    pub total_entries: usize,
    /// Entry counts by directive tag (e.g. `@ARTICLE`)
    pub entries_by_type: AHashMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, tag: &str, year: Option<&str>) -> Entry {
        let mut e = Entry::new(key, tag);
        if let Some(year) = year {
            e.set("year", year);
        }
        e
    }

    fn sample() -> EntryTable {
        [
            ("b", entry("b", "@ARTICLE", Some("2001"))),
            ("a", entry("a", "@ARTICLE", Some("2001"))),
            ("c", entry("c", "@BOOK", Some("1999"))),
            ("d", entry("d", "@MISC", None)),
        ]
        .into_iter()
        .map(|(k, e)| (k.to_string(), e))
        .collect()
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = EntryTable::new();
        assert!(table.insert("k", entry("k", "@MISC", None)).is_none());
        let old = table.insert("k", entry("k", "@BOOK", None));
        assert_eq!(old.map(|e| e.entry_type_key().to_string()).as_deref(), Some("@MISC"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("k").map(Entry::entry_type_key), Some("@BOOK"));
        assert!(table.get("K").is_none());
    }

    #[test]
    fn test_queries() {
        let table = sample();
        assert_eq!(table.find_by_type("article").len(), 2);
        assert_eq!(table.find_by_type("@BOOK").len(), 1);
        assert_eq!(table.find_by_field("year", "200").len(), 2);
        assert!(table.find_by_field("journal", "x").is_empty());

        let stats = table.stats();
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.entries_by_type.get("@ARTICLE"), Some(&2));
    }

    #[test]
    fn test_sorted_by() {
        let table = sample();
        let keys: Vec<_> = table.sorted_by("year").iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut table = sample();
        let mut other = EntryTable::new();
        other.insert("d", entry("d", "@ARTICLE", Some("2020")));
        other.insert("e", entry("e", "@BOOK", None));
        table.merge(other);

        assert_eq!(table.len(), 5);
        assert_eq!(table.get("d").and_then(|e| e.get("year")), Some("2020"));
    }
}
