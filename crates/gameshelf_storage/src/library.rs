//! Library state: the game store, the relation graph, and the undo log.
//!
//! This is the whole in-memory application state. It performs no I/O;
//! callers persist after mutations.

use gameshelf_foundation::{AppId, Error, GameRecord, Result, UserProfile};
use tracing::debug;

use crate::relation::RelationGraph;
use crate::store::{GameStore, SortKey};
use crate::undo::{UndoAction, UndoStack};

/// Result of a successful [`Library::relate`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RelateOutcome {
    /// A new relation was recorded and can be undone.
    Created,
    /// The two games were already related; nothing changed.
    AlreadyRelated,
    /// Both ids named the same game; nothing changed.
    SelfRelation,
}

/// In-memory library: games, their relations, and relation undo history.
#[derive(Clone, Debug, Default)]
pub struct Library {
    store: GameStore,
    relations: RelationGraph,
    undo: UndoStack,
}

impl Library {
    /// Creates an empty library with the default undo depth.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty library whose undo log holds `undo_depth` entries.
    #[must_use]
    pub fn with_undo_depth(undo_depth: usize) -> Self {
        Self {
            undo: UndoStack::new(undo_depth),
            ..Self::default()
        }
    }

    /// Returns the game store.
    #[must_use]
    pub const fn store(&self) -> &GameStore {
        &self.store
    }

    /// Returns the relation graph.
    #[must_use]
    pub const fn relations(&self) -> &RelationGraph {
        &self.relations
    }

    /// Returns the undo log.
    #[must_use]
    pub const fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    /// Replaces the game snapshot and rebuilds the name index.
    ///
    /// Relations are keyed by app id and survive the swap.
    pub fn replace_games(&mut self, records: Vec<GameRecord>, user: UserProfile) {
        self.store.replace(records, user);
        debug!(games = self.store.len(), "Rebuilt name index");
    }

    /// Replaces the relation graph wholesale.
    ///
    /// Pending undo entries refer to the old graph and are discarded.
    pub fn replace_relations(&mut self, relations: RelationGraph) {
        self.relations = relations;
        self.undo.clear();
        debug!(games = self.relations.len(), "Replaced relation graph");
    }

    /// Games whose names start with `prefix`, in store order.
    #[must_use]
    pub fn search(&self, prefix: &str) -> Vec<&GameRecord> {
        self.store.search(prefix)
    }

    /// Looks up a game by full name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no game has that name.
    pub fn lookup_exact(&self, name: &str) -> Result<&GameRecord> {
        self.store
            .lookup_exact(name)
            .ok_or_else(|| Error::game_not_found(name))
    }

    /// Resolves an app id, name, or prefix to a game.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if nothing matches.
    pub fn resolve(&self, identifier: &str) -> Result<&GameRecord> {
        self.store
            .resolve(identifier)
            .ok_or_else(|| Error::game_not_found(identifier))
    }

    /// Every game, sorted by `key`.
    #[must_use]
    pub fn list_all(&self, key: SortKey) -> Vec<&GameRecord> {
        self.store.list_all(key)
    }

    /// Relates two games and records the edit for undo.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if either id is not in the current store.
    pub fn relate(&mut self, first: AppId, second: AppId) -> Result<RelateOutcome> {
        self.require(first)?;
        self.require(second)?;

        if first == second {
            return Ok(RelateOutcome::SelfRelation);
        }
        if !self.relations.add_relation(first, second) {
            return Ok(RelateOutcome::AlreadyRelated);
        }
        self.undo.push(UndoAction::AddRelation { first, second });
        debug!(%first, %second, "Related games");
        Ok(RelateOutcome::Created)
    }

    /// Returns up to `max_count` games related to `id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `id` is not in the current store.
    pub fn recommend(&self, id: AppId, max_count: usize) -> Result<Vec<AppId>> {
        self.require(id)?;
        Ok(self.relations.related_games(id, max_count))
    }

    /// Reverts the most recent relation edit.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<UndoAction> {
        let action = self.undo.pop_and_revert(&mut self.relations)?;
        debug!(%action, "Reverted");
        Some(action)
    }

    fn require(&self, id: AppId) -> Result<&GameRecord> {
        self.store
            .find_by_app_id(id)
            .ok_or_else(|| Error::app_not_found(id))
    }
}
