//! Run-scoped pseudonym table
//!
//! Owned by the build and threaded into every redact call by mutable
//! reference; never a module-level singleton. Exported alongside the
//! dataset so redactions stay reversible only for the table holder.

use serde::Serialize;
use std::collections::BTreeMap;

/// Stable mapping from a detected literal value to its replacement token.
///
/// Keys are `"CATEGORY::literal"` with the literal lowercased, so lookups
/// are case-insensitive. Sequence numbers are per category, assigned in
/// first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PseudonymTable {
    entries: BTreeMap<String, String>,
    #[serde(skip)]
    counters: BTreeMap<String, usize>,
}

impl PseudonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for a literal in a category, assigning the next sequence
    /// number on first sight.
    pub fn token_for(&mut self, category: &str, literal: &str) -> String {
        let key = format!("{}::{}", category, literal.to_lowercase());
        if let Some(token) = self.entries.get(&key) {
            return token.clone();
        }

        let counter = self.counters.entry(category.to_string()).or_insert(0);
        *counter += 1;
        let token = format!("{}_{:03}", category, counter);
        self.entries.insert(key, token.clone());
        token
    }

    /// Look up an existing assignment without creating one.
    pub fn get(&self, category: &str, literal: &str) -> Option<&str> {
        self.entries
            .get(&format!("{}::{}", category, literal.to_lowercase()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_ordering() {
        let mut table = PseudonymTable::new();
        assert_eq!(table.token_for("NAME", "Rex"), "NAME_001");
        assert_eq!(table.token_for("NAME", "Brenda"), "NAME_002");
        assert_eq!(table.token_for("NAME", "Rex"), "NAME_001");
    }

    #[test]
    fn test_case_insensitive_reuse() {
        let mut table = PseudonymTable::new();
        let a = table.token_for("LOC", "Lincoln");
        let b = table.token_for("LOC", "LINCOLN");
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_counters_are_per_category() {
        let mut table = PseudonymTable::new();
        assert_eq!(table.token_for("NAME", "Rex"), "NAME_001");
        assert_eq!(table.token_for("LOC", "Lincoln"), "LOC_001");
        assert_eq!(table.token_for("DATE", "2024-01-01"), "DATE_001");
    }

    #[test]
    fn test_get_does_not_assign() {
        let mut table = PseudonymTable::new();
        assert_eq!(table.get("NAME", "Rex"), None);
        table.token_for("NAME", "Rex");
        assert_eq!(table.get("NAME", "rex"), Some("NAME_001"));
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut table = PseudonymTable::new();
        table.token_for("NAME", "Rex");
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["NAME::rex"], "NAME_001");
    }
}
