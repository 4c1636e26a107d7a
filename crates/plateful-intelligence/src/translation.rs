// ABOUTME: Injected key-value contract for meal-name translations
// ABOUTME: The engine consults it to fill English names and never requires it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateful

//! Translation Store
//!
//! Corpus meal names arrive mostly in Korean; deployments that show English
//! names keep a translation side-store populated by an external translation
//! collaborator. The engine depends only on this `get`/`put` contract — it
//! never owns the storage, never blocks on it, and produces identical
//! rankings whether or not a store is present.

use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

/// Maximum entries retained by the in-memory store
const MAX_TOTAL_ENTRIES: usize = 10_000;

/// Key-value contract for meal-name translations
pub trait TranslationStore: Send + Sync {
    /// Look up a translated name
    fn get(&self, name: &str) -> Option<String>;

    /// Record a translated name
    fn put(&self, name: &str, translated: &str);
}

/// Bounded in-memory translation store.
///
/// The default implementation for single-process deployments and tests;
/// production deployments typically inject a database-backed store.
#[derive(Debug, Default)]
pub struct InMemoryTranslationStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryTranslationStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from an existing mapping
    #[must_use]
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Number of retained entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |map| map.len())
    }

    /// True when the store holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TranslationStore for InMemoryTranslationStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(name).cloned())
    }

    fn put(&self, name: &str, translated: &str) {
        match self.entries.write() {
            Ok(mut map) => {
                if map.len() >= MAX_TOTAL_ENTRIES && !map.contains_key(name) {
                    return;
                }
                map.insert(name.to_owned(), translated.to_owned());
            }
            Err(_) => warn!("translation store lock poisoned, dropping entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_round_trips() {
        let store = InMemoryTranslationStore::new();
        store.put("비빔밥", "Bibimbap");
        assert_eq!(store.get("비빔밥").as_deref(), Some("Bibimbap"));
        assert_eq!(store.get("불고기"), None);
    }

    #[test]
    fn preloaded_entries_are_visible() {
        let mut seed = HashMap::new();
        seed.insert("김치찌개".to_owned(), "Kimchi Stew".to_owned());
        let store = InMemoryTranslationStore::with_entries(seed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("김치찌개").as_deref(), Some("Kimchi Stew"));
    }
}
