//! gameshelf - Local game library cache with prefix search and related-game links
//!
//! This crate re-exports all layers of gameshelf for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: gameshelf_runtime    - Shell, CLI, JSON persistence, import/export
//! Layer 1: gameshelf_storage    - Name index, game store, relations, undo
//! Layer 0: gameshelf_foundation - Core types (AppId, GameRecord, Error)
//! ```

pub use gameshelf_foundation as foundation;
pub use gameshelf_runtime as runtime;
pub use gameshelf_storage as storage;
