//! Library and relation graph persistence using JSON.
//!
//! Writes go to a sibling temp file that is renamed over the target, so a
//! crash mid-write never leaves a truncated file behind. A missing file is
//! not an error: loaders return `Ok(None)` and callers start empty.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use gameshelf_foundation::{AppId, Error, GameRecord, Result, UserProfile};
use gameshelf_storage::RelationGraph;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name given to games stored without one.
pub const UNKNOWN_GAME: &str = "Unknown Game";

/// A library snapshot as stored in the games file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibrarySnapshot {
    /// Account the games belong to.
    pub user: UserProfile,
    /// Games in stored order.
    pub games: Vec<GameRecord>,
}

/// A relation graph plus any entries that had to be dropped while loading.
#[derive(Clone, Debug, Default)]
pub struct LoadedRelations {
    /// The normalized graph.
    pub graph: RelationGraph,
    /// One message per skipped key or value.
    pub skipped: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct GamesDocument {
    #[serde(default)]
    user: UserProfile,
    #[serde(default)]
    games: Vec<StoredGame>,
}

#[derive(Serialize, Deserialize)]
struct StoredGame {
    #[serde(default = "unknown_game")]
    name: String,
    #[serde(default)]
    app_id: AppId,
    #[serde(default)]
    playtime_forever: u32,
}

fn unknown_game() -> String {
    UNKNOWN_GAME.to_string()
}

impl From<&GameRecord> for StoredGame {
    fn from(record: &GameRecord) -> Self {
        Self {
            name: record.name.clone(),
            app_id: record.app_id,
            playtime_forever: record.playtime_minutes,
        }
    }
}

impl From<StoredGame> for GameRecord {
    fn from(stored: StoredGame) -> Self {
        Self::new(stored.name, stored.app_id, stored.playtime_forever)
    }
}

/// Encodes a library snapshot as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn games_to_json(user: &UserProfile, games: &[GameRecord]) -> Result<String> {
    let document = GamesDocument {
        user: user.clone(),
        games: games.iter().map(StoredGame::from).collect(),
    };
    serde_json::to_string_pretty(&document).map_err(|e| encode_error("games", &e))
}

/// Decodes a library snapshot.
///
/// Missing members and fields fall back to defaults.
///
/// # Errors
///
/// Returns a malformed data error naming `origin` if the text is not valid.
pub fn games_from_json(text: &str, origin: &str) -> Result<LibrarySnapshot> {
    let document: GamesDocument =
        serde_json::from_str(text).map_err(|e| Error::malformed(origin, e))?;
    Ok(LibrarySnapshot {
        user: document.user,
        games: document.games.into_iter().map(GameRecord::from).collect(),
    })
}

/// Writes a library snapshot to `path`.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_games<P: AsRef<Path>>(path: P, user: &UserProfile, games: &[GameRecord]) -> Result<()> {
    let path = path.as_ref();
    let text = games_to_json(user, games)?;
    write_atomic(path, &text)?;
    tracing::debug!("Saved {} games to {}", games.len(), path.display());
    Ok(())
}

/// Reads a library snapshot from `path`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn load_games<P: AsRef<Path>>(path: P) -> Result<Option<LibrarySnapshot>> {
    let path = path.as_ref();
    let Some(text) = read_optional(path)? else {
        return Ok(None);
    };
    let snapshot = games_from_json(&text, &path.display().to_string())?;
    tracing::debug!("Loaded {} games from {}", snapshot.games.len(), path.display());
    Ok(Some(snapshot))
}

/// Encodes a relation graph as `{"<id>": [<id>, ...]}`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn relations_to_json(graph: &RelationGraph) -> Result<String> {
    let rows: IndexMap<String, Vec<AppId>> = graph
        .iter()
        .map(|(id, related)| (id.to_string(), related.iter().copied().collect()))
        .collect();
    serde_json::to_string_pretty(&rows).map_err(|e| encode_error("relations", &e))
}

/// Decodes a relation graph.
///
/// Every pair goes through [`RelationGraph::add_relation`], so asymmetric
/// rows, self-loops and empty arrays are normalized. Keys that are not app
/// ids and values that are not arrays of app ids are skipped and reported.
///
/// # Errors
///
/// Returns a malformed data error if the text is not a JSON object.
pub fn relations_from_json(text: &str, origin: &str) -> Result<LoadedRelations> {
    let rows: IndexMap<String, Value> =
        serde_json::from_str(text).map_err(|e| Error::malformed(origin, e))?;

    let mut loaded = LoadedRelations::default();
    for (key, value) in rows {
        let Ok(id) = key.parse::<AppId>() else {
            loaded.skipped.push(format!("key '{key}' is not an app id"));
            continue;
        };
        let Value::Array(items) = value else {
            loaded.skipped.push(format!("value for {id} is not an array"));
            continue;
        };
        for item in items {
            match item.as_u64().and_then(|raw| u32::try_from(raw).ok()) {
                Some(raw) => {
                    loaded.graph.add_relation(id, AppId(raw));
                }
                None => loaded
                    .skipped
                    .push(format!("value {item} related to {id} is not an app id")),
            }
        }
    }
    Ok(loaded)
}

/// Writes a relation graph to `path`.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_relations<P: AsRef<Path>>(path: P, graph: &RelationGraph) -> Result<()> {
    let path = path.as_ref();
    let text = relations_to_json(graph)?;
    write_atomic(path, &text)?;
    tracing::debug!(
        "Saved {} relations to {}",
        graph.edge_count(),
        path.display()
    );
    Ok(())
}

/// Reads a relation graph from `path`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON object.
pub fn load_relations<P: AsRef<Path>>(path: P) -> Result<Option<LoadedRelations>> {
    let path = path.as_ref();
    let Some(text) = read_optional(path)? else {
        return Ok(None);
    };
    let loaded = relations_from_json(&text, &path.display().to_string())?;
    for message in &loaded.skipped {
        tracing::warn!("{}: skipped {message}", path.display());
    }
    tracing::debug!(
        "Loaded {} relations from {}",
        loaded.graph.edge_count(),
        path.display()
    );
    Ok(Some(loaded))
}

fn encode_error(what: &str, e: &serde_json::Error) -> Error {
    Error::internal(format!("cannot encode {what}: {e}"))
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::persistence(path, e)),
    }
}

pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut temp_name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, contents).map_err(|e| Error::persistence(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::persistence(path, e)
    })
}
