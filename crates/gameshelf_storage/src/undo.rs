//! Bounded undo log for relation edits.
//!
//! Entries are consumed newest-first; when the log is full the oldest entry
//! is evicted to make room.

use std::collections::VecDeque;
use std::fmt;

use gameshelf_foundation::AppId;

use crate::relation::RelationGraph;

/// Default number of undoable edits retained.
pub const DEFAULT_UNDO_DEPTH: usize = 10;

/// A reversible edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoAction {
    /// A relation was created between two games.
    AddRelation {
        /// First game as given to `relate`.
        first: AppId,
        /// Second game as given to `relate`.
        second: AppId,
    },
}

impl UndoAction {
    /// Applies the inverse of this action.
    ///
    /// The relation is not checked for existence first: if it is already
    /// gone, reverting is a no-op.
    pub fn revert(&self, graph: &mut RelationGraph) {
        match *self {
            Self::AddRelation { first, second } => {
                graph.remove_relation(first, second);
            }
        }
    }
}

impl fmt::Display for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddRelation { first, second } => {
                write!(f, "relation between app {first} and app {second}")
            }
        }
    }
}

/// Fixed-capacity LIFO of [`UndoAction`]s.
#[derive(Clone, Debug)]
pub struct UndoStack {
    /// Oldest entry at the front, newest at the back.
    entries: VecDeque<UndoAction>,
    capacity: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_DEPTH)
    }
}

impl UndoStack {
    /// Creates an empty stack that holds at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Returns the maximum depth.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records an action, evicting the oldest entry if at capacity.
    pub fn push(&mut self, action: UndoAction) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(action);
    }

    /// Removes and returns the most recent action.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.entries.pop_back()
    }

    /// Returns the most recent action without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&UndoAction> {
        self.entries.back()
    }

    /// Pops the most recent action and reverts it against `graph`.
    ///
    /// Returns `None` when there is nothing to undo; the graph is untouched.
    pub fn pop_and_revert(&mut self, graph: &mut RelationGraph) -> Option<UndoAction> {
        let action = self.pop()?;
        action.revert(graph);
        Some(action)
    }

    /// Iterates pending actions from newest to oldest.
    pub fn iter_rev(&self) -> impl Iterator<Item = &UndoAction> {
        self.entries.iter().rev()
    }

    /// Drops every pending action.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
