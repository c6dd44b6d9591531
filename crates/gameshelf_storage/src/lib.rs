//! Name index, game store, relation graph, and undo log for gameshelf.
//!
//! This crate provides:
//! - [`PrefixTree`] - Arena-backed trie over folded game names
//! - [`NameIndex`] - Prefix tree plus exact-match hash index
//! - [`GameStore`] - One library snapshot and its index
//! - [`RelationGraph`] - Undirected related-games adjacency
//! - [`UndoStack`] - Bounded log of reversible relation edits
//! - [`Library`] - The full in-memory application state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod library;
pub mod relation;
pub mod store;
pub mod trie;
pub mod undo;

pub use index::NameIndex;
pub use library::{Library, RelateOutcome};
pub use relation::RelationGraph;
pub use store::{GameStore, PlaytimeSummary, SortKey};
pub use trie::PrefixTree;
pub use undo::{DEFAULT_UNDO_DEPTH, UndoAction, UndoStack};
