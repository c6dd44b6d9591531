//! Library snapshot sources.
//!
//! A [`LibraryFetcher`] turns an account reference into a fresh snapshot.
//! The shipped [`OwnedGamesFile`] reads a saved `GetOwnedGames` response.

use std::fs;
use std::path::{Path, PathBuf};

use gameshelf_foundation::{AppId, Error, GameRecord, Result, UserProfile};
use serde::Deserialize;

use crate::serialize::LibrarySnapshot;

/// Name given to games the source reports without one.
pub const UNNAMED_GAME: &str = "Unnamed Game";

/// Produces library snapshots for an account.
pub trait LibraryFetcher {
    /// Fetches the full library for `account`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or decoded.
    fn fetch_library(&self, account: &str) -> Result<LibrarySnapshot>;
}

#[derive(Deserialize)]
struct OwnedGamesEnvelope {
    #[serde(default)]
    response: Option<OwnedGamesResponse>,
}

#[derive(Deserialize)]
struct OwnedGamesResponse {
    #[serde(default)]
    games: Option<Vec<OwnedGame>>,
}

#[derive(Deserialize)]
struct OwnedGame {
    #[serde(default)]
    appid: u32,
    #[serde(default = "unnamed_game")]
    name: String,
    #[serde(default)]
    playtime_forever: u32,
}

fn unnamed_game() -> String {
    UNNAMED_GAME.to_string()
}

/// Decodes a `GetOwnedGames` response body.
///
/// A response with no game list (a private profile) yields an empty
/// library rather than an error.
///
/// # Errors
///
/// Returns a malformed data error naming `origin` if the body is not valid.
pub fn parse_owned_games(text: &str, origin: &str) -> Result<Vec<GameRecord>> {
    let envelope: OwnedGamesEnvelope =
        serde_json::from_str(text).map_err(|e| Error::malformed(origin, e))?;

    let Some(games) = envelope.response.and_then(|response| response.games) else {
        tracing::warn!("{origin}: no games in response, profile might be private");
        return Ok(Vec::new());
    };

    Ok(games
        .into_iter()
        .map(|game| GameRecord::new(game.name, AppId(game.appid), game.playtime_forever))
        .collect())
}

/// Reads saved `GetOwnedGames` responses from disk.
///
/// The account reference is a file path, resolved against an optional base
/// directory. The file stem stands in for the account's id and name.
#[derive(Clone, Debug, Default)]
pub struct OwnedGamesFile {
    base_dir: Option<PathBuf>,
}

impl OwnedGamesFile {
    /// Creates a fetcher that resolves paths against the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative account paths against `dir`.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, account: &str) -> PathBuf {
        let path = Path::new(account);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl LibraryFetcher for OwnedGamesFile {
    fn fetch_library(&self, account: &str) -> Result<LibrarySnapshot> {
        let account = account.trim();
        if account.is_empty() {
            return Err(Error::invalid_argument("import requires a file path"));
        }

        let path = self.resolve(account);
        let text = fs::read_to_string(&path).map_err(|e| Error::persistence(&path, e))?;
        let games = parse_owned_games(&text, &path.display().to_string())?;

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let user = UserProfile::new(stem.clone(), "Unknown", stem);

        tracing::info!("Imported {} games from {}", games.len(), path.display());
        Ok(LibrarySnapshot { user, games })
    }
}
