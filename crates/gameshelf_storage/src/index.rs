//! Name index: prefix tree plus exact-match hash map.
//!
//! Both halves are fed by the same inserts and cleared together, so they
//! always describe the same store snapshot.

use std::collections::HashMap;

use gameshelf_foundation::{GameRecord, fold_name};

use crate::trie::PrefixTree;

/// Case-insensitive name index over store positions.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    tree: PrefixTree,
    /// Folded full name -> position. Later inserts win on duplicate names.
    exact: HashMap<String, usize>,
}

impl NameIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh index over `records`, positions `0..records.len()`.
    #[must_use]
    pub fn build(records: &[GameRecord]) -> Self {
        let mut index = Self {
            tree: PrefixTree::new(),
            exact: HashMap::with_capacity(records.len()),
        };
        for (position, record) in records.iter().enumerate() {
            index.insert(&record.name, position);
        }
        index
    }

    /// Indexes `position` under `name`.
    pub fn insert(&mut self, name: &str, position: usize) {
        self.tree.insert(name, position);
        self.exact.insert(fold_name(name), position);
    }

    /// Returns every position whose name starts with `prefix`, ascending.
    #[must_use]
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<usize> {
        self.tree.search_by_prefix(prefix)
    }

    /// Looks up a full name, ignoring case.
    #[must_use]
    pub fn lookup_exact(&self, name: &str) -> Option<usize> {
        self.exact.get(&fold_name(name)).copied()
    }

    /// Drops every entry from both halves.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.exact.clear();
    }

    /// Returns the number of indexed positions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if nothing is indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
