//! Runtime configuration read from the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use gameshelf_foundation::{Error, Result};
use gameshelf_storage::DEFAULT_UNDO_DEPTH;

/// Default number of commands kept by `history`.
pub const DEFAULT_HISTORY_SIZE: usize = 20;

/// Default number of games shown by `recs`.
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

const GAMES_FILE: &str = "games.json";
const RELATIONS_FILE: &str = "relations.json";
const EXPORT_DIR: &str = "exported";

/// Where gameshelf keeps its files and how much history it retains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the games file, relations file and exports.
    pub data_dir: PathBuf,
    /// Maximum number of undoable relation edits.
    pub undo_depth: usize,
    /// Maximum number of remembered commands.
    pub history_size: usize,
    /// Number of related games shown when `recs` gets no count.
    pub max_recommendations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            undo_depth: DEFAULT_UNDO_DEPTH,
            history_size: DEFAULT_HISTORY_SIZE,
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

impl Config {
    /// Builds configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GAMESHELF_DATA_DIR` - Data directory (default: `data`)
    /// - `GAMESHELF_UNDO_DEPTH` - Undo log depth (default: 10)
    /// - `GAMESHELF_HISTORY_SIZE` - Command history size (default: 20)
    /// - `GAMESHELF_MAX_RECOMMENDATIONS` - Default `recs` count (default: 5)
    ///
    /// Unset or unparseable values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("GAMESHELF_DATA_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(depth) = read_var::<usize>(&lookup, "GAMESHELF_UNDO_DEPTH") {
            config.undo_depth = depth;
        }
        if let Some(size) = read_var::<usize>(&lookup, "GAMESHELF_HISTORY_SIZE") {
            config.history_size = size;
        }
        if let Some(count) = read_var::<usize>(&lookup, "GAMESHELF_MAX_RECOMMENDATIONS") {
            config.max_recommendations = count.max(1);
        }

        config
    }

    /// Replaces the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Path of the cached library snapshot.
    #[must_use]
    pub fn games_path(&self) -> PathBuf {
        self.data_dir.join(GAMES_FILE)
    }

    /// Path of the relation graph.
    #[must_use]
    pub fn relations_path(&self) -> PathBuf {
        self.data_dir.join(RELATIONS_FILE)
    }

    /// Directory CSV exports are written to.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join(EXPORT_DIR)
    }

    /// Creates the data directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> Result<()> {
        ensure_dir(&self.data_dir)
    }
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::persistence(dir, e))
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}
