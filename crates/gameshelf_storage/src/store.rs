//! The game store: one library snapshot plus its name index.
//!
//! Positions handed out by the index are only meaningful against the
//! snapshot they were built from, so records and index are always replaced
//! together.

use std::cmp::Reverse;

use gameshelf_foundation::{AppId, GameRecord, UserProfile};

use crate::index::NameIndex;

/// Ordering for [`GameStore::list_all`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    Name,
    /// Playtime descending, then name.
    Playtime,
}

/// Played/unplayed counts for a library.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaytimeSummary {
    /// Games with any playtime.
    pub played: usize,
    /// Games never launched.
    pub unplayed: usize,
    /// All games.
    pub total: usize,
}

/// Ordered collection of game records with a name index over it.
#[derive(Clone, Debug, Default)]
pub struct GameStore {
    records: Vec<GameRecord>,
    index: NameIndex,
    user: UserProfile,
}

impl GameStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a snapshot.
    #[must_use]
    pub fn from_records(records: Vec<GameRecord>, user: UserProfile) -> Self {
        let index = NameIndex::build(&records);
        Self {
            records,
            index,
            user,
        }
    }

    /// Replaces the whole snapshot.
    ///
    /// The new index is built completely before anything is swapped in.
    pub fn replace(&mut self, records: Vec<GameRecord>, user: UserProfile) {
        let rebuilt = Self::from_records(records, user);
        *self = rebuilt;
    }

    /// Returns every record in store order.
    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Returns the record at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&GameRecord> {
        self.records.get(position)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the account this snapshot belongs to.
    #[must_use]
    pub const fn user(&self) -> &UserProfile {
        &self.user
    }

    /// Returns true once a snapshot for a known account has been loaded.
    #[must_use]
    pub fn has_fetched(&self) -> bool {
        self.user.is_known()
    }

    /// Returns the name index.
    #[must_use]
    pub const fn index(&self) -> &NameIndex {
        &self.index
    }

    /// Returns every game whose name starts with `prefix`, in store order.
    #[must_use]
    pub fn search(&self, prefix: &str) -> Vec<&GameRecord> {
        self.index
            .search_by_prefix(prefix)
            .into_iter()
            .filter_map(|position| self.records.get(position))
            .collect()
    }

    /// Looks up a game by its full name, ignoring case.
    #[must_use]
    pub fn lookup_exact(&self, name: &str) -> Option<&GameRecord> {
        self.index
            .lookup_exact(name)
            .and_then(|position| self.records.get(position))
    }

    /// Finds the first game with the given app id.
    #[must_use]
    pub fn find_by_app_id(&self, id: AppId) -> Option<&GameRecord> {
        self.records.iter().find(|record| record.app_id == id)
    }

    /// Resolves a user-typed identifier to a game.
    ///
    /// Tries, in order: an app id present in the store, an exact name, and
    /// the first game whose name starts with the identifier.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<&GameRecord> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }
        if let Some(record) = identifier
            .parse::<AppId>()
            .ok()
            .and_then(|id| self.find_by_app_id(id))
        {
            return Some(record);
        }
        self.lookup_exact(identifier).or_else(|| {
            self.index
                .search_by_prefix(identifier)
                .first()
                .and_then(|&position| self.records.get(position))
        })
    }

    /// Returns every game sorted by `key`.
    #[must_use]
    pub fn list_all(&self, key: SortKey) -> Vec<&GameRecord> {
        let mut keyed: Vec<(String, &GameRecord)> = self
            .records
            .iter()
            .map(|record| (record.folded_name(), record))
            .collect();

        match key {
            SortKey::Name => keyed.sort_by(|(a, _), (b, _)| a.cmp(b)),
            SortKey::Playtime => keyed.sort_by(|(a_name, a), (b_name, b)| {
                Reverse(a.playtime_minutes)
                    .cmp(&Reverse(b.playtime_minutes))
                    .then_with(|| a_name.cmp(b_name))
            }),
        }

        keyed.into_iter().map(|(_, record)| record).collect()
    }

    /// Groups name-sorted games under their uppercased initial.
    ///
    /// Names that do not start with a letter are grouped under `#`; empty
    /// names are skipped.
    #[must_use]
    pub fn group_by_initial(&self) -> Vec<(char, Vec<&GameRecord>)> {
        let mut groups: Vec<(char, Vec<&GameRecord>)> = Vec::new();
        for record in self.list_all(SortKey::Name) {
            let Some(first) = record.name.chars().next() else {
                continue;
            };
            let initial = if first.is_alphabetic() {
                first.to_uppercase().next().unwrap_or(first)
            } else {
                '#'
            };
            if groups.last().is_none_or(|(current, _)| *current != initial) {
                groups.push((initial, Vec::new()));
            }
            if let Some((_, members)) = groups.last_mut() {
                members.push(record);
            }
        }
        groups
    }

    /// Counts played and unplayed games.
    #[must_use]
    pub fn playtime_summary(&self) -> PlaytimeSummary {
        let played = self.records.iter().filter(|r| r.is_played()).count();
        PlaytimeSummary {
            played,
            unplayed: self.records.len() - played,
            total: self.records.len(),
        }
    }
}
