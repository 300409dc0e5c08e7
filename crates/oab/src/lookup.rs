//! Shared key-lookup table.

use std::collections::HashMap;

/// An ordered, immutable sequence of strings shared out-of-band by both
/// endpoints of the codec.
///
/// The wire carries only indices, never the strings themselves, so both
/// sides must hold the *same* table content at the *same* indices. The
/// format has no checksum of the table; divergence between endpoints is
/// undetectable and silently decodes to the wrong keys. That is the
/// documented sharing contract, not a defect the codec can catch.
///
/// Read-only after construction; share it via `Arc` across any number of
/// encoders and decoders.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    entries: Vec<String>,
    // First occurrence wins for duplicate strings; decode addresses
    // `entries` directly so duplicates stay reachable by index.
    index: HashMap<String, usize>,
}

impl Lookup {
    /// Builds a table from its ordered entries.
    pub fn new(entries: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, key) in entries.iter().enumerate() {
            index.entry(key.clone()).or_insert(i);
        }
        Self { entries, index }
    }

    /// Returns the first index whose stored string equals `key`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Returns the string at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Lookup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_and_get() {
        let lookup: Lookup = ["id", "name", "tags"].into_iter().collect();
        assert_eq!(lookup.index_of("name"), Some(1));
        assert_eq!(lookup.index_of("missing"), None);
        assert_eq!(lookup.get(2), Some("tags"));
        assert_eq!(lookup.get(3), None);
    }

    #[test]
    fn test_duplicate_first_occurrence_wins() {
        let lookup: Lookup = ["a", "b", "a"].into_iter().collect();
        assert_eq!(lookup.index_of("a"), Some(0));
        // Decoding addresses the table positionally, so the duplicate slot
        // is still reachable.
        assert_eq!(lookup.get(2), Some("a"));
        assert_eq!(lookup.len(), 3);
    }

    #[test]
    fn test_empty() {
        let lookup = Lookup::default();
        assert!(lookup.is_empty());
        assert_eq!(lookup.index_of("a"), None);
    }
}
