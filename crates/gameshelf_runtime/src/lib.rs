//! Shell, CLI, and persistence for gameshelf.
//!
//! This crate provides:
//! - [`Config`] - Environment-driven settings and data file paths
//! - JSON persistence for the library snapshot and relation graph
//! - [`LibraryFetcher`] - Snapshot import from saved API responses
//! - CSV export
//! - [`Session`] and [`Repl`] - Command execution and the interactive loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod export;
pub mod fetch;
pub mod highlight;
pub mod history;
pub mod render;
pub mod repl;
pub mod serialize;
pub mod session;

pub use command::{Command, HistoryCount, ListMode};
pub use config::Config;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use fetch::{LibraryFetcher, OwnedGamesFile};
pub use history::CommandHistory;
pub use repl::Repl;
pub use serialize::{LibrarySnapshot, LoadedRelations};
pub use session::{Response, Session};
