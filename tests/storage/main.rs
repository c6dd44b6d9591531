//! Integration tests for Layer 1: Storage
//!
//! Tests for the name index, relation graph, undo log, and library state.

mod index;
mod library;
mod relations;
mod undo;
