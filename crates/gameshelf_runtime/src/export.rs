//! CSV export of a library snapshot.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use gameshelf_foundation::{Error, GameRecord, Result};

use crate::config::ensure_dir;
use crate::serialize::write_atomic;

/// Header row of every export.
pub const CSV_HEADER: &str = "AppID,Name,PlaytimeMinutes";

/// Quotes a field if it contains a comma or quote, doubling inner quotes.
#[must_use]
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Renders `games` as CSV text, header included.
#[must_use]
pub fn to_csv(games: &[GameRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + games.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for game in games {
        let _ = writeln!(
            out,
            "{},{},{}",
            game.app_id,
            csv_field(&game.name),
            game.playtime_minutes
        );
    }
    out
}

/// Returns the export path for `name` inside `export_dir`.
///
/// # Errors
///
/// Returns an invalid argument error if `name` is empty or is not a plain
/// file name.
pub fn export_path(export_dir: &Path, name: &str) -> Result<PathBuf> {
    let name = name.trim();
    let base = name.strip_suffix(".csv").unwrap_or(name);
    let plain = Path::new(base)
        .file_name()
        .is_some_and(|file| file == base);
    if base.is_empty() || !plain || base.starts_with('.') {
        return Err(Error::invalid_argument(format!(
            "'{name}' is not a valid export name"
        )));
    }
    Ok(export_dir.join(format!("{base}.csv")))
}

/// Writes `games` to `<export_dir>/<name>.csv`, creating the directory.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if the name is invalid or the file cannot be written.
pub fn export_csv(export_dir: &Path, name: &str, games: &[GameRecord]) -> Result<PathBuf> {
    let path = export_path(export_dir, name)?;
    ensure_dir(export_dir)?;
    write_atomic(&path, &to_csv(games))?;
    tracing::debug!("Exported {} games to {}", games.len(), path.display());
    Ok(path)
}
