use std::collections::{HashMap, HashSet};

use crate::text;

/// Shared commerce vocabulary every specialist starts from. Keys and values
/// are in normalized form.
const BASE_ENTRIES: &[(&str, &str)] = &[
    ("fiyat", "ucret"),
    ("ucret", "fiyat"),
    ("kaca", "fiyat"),
    ("hizmet", "servis"),
    ("urun", "hizmet"),
    ("kampanya", "indirim"),
    ("indirim", "kampanya"),
    ("paket", "hizmet"),
];

/// Canonical-token to canonical-token map. A specialist's table is built
/// once, as the base entries overlaid with the vertical entries; vertical
/// entries win on key collision.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl SynonymTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn base() -> Self {
        let mut table = Self::default();
        for &(key, value) in BASE_ENTRIES {
            table.insert(key, value);
        }
        table
    }

    pub fn for_vertical(entries: &[(&str, &str)]) -> Self {
        let mut table = Self::base();
        for &(key, value) in entries {
            table.insert(key, value);
        }
        table
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expands a normalized query into its membership token set: the
    /// surviving tokens plus the mapped value of every key that exactly
    /// matches a token, is contained in one, or contains one. Several keys
    /// may fire on a single token; the extra recall is intentional.
    pub fn expand(&self, normalized: &str) -> ExpandedQuery {
        let tokens = text::tokenize(normalized);
        let mut set: HashSet<String> = tokens.iter().cloned().collect();

        for token in &tokens {
            for (key, value) in &self.entries {
                if key == token || key.contains(token.as_str()) || token.contains(key.as_str()) {
                    set.insert(value.clone());
                }
            }
        }

        ExpandedQuery {
            normalized: normalized.to_string(),
            tokens: set,
        }
    }
}

/// Ephemeral per-query view consumed by the catalog matcher.
#[derive(Debug, Clone)]
pub struct ExpandedQuery {
    pub normalized: String,
    pub tokens: HashSet<String>,
}
