//! Game records, app ids, and the account a library belongs to.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable external identifier of a game (a Steam app id).
///
/// Unlike a record's position in the store, an `AppId` survives refetches,
/// which is why the relation graph is keyed by it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AppId(pub u32);

impl AppId {
    /// Creates an app id from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppId({})", self.0)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for AppId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for AppId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// One game in a fetched library.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameRecord {
    /// Display name as reported by the store API.
    pub name: String,
    /// Stable external id.
    pub app_id: AppId,
    /// Total playtime in minutes.
    pub playtime_minutes: u32,
}

impl GameRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(name: impl Into<String>, app_id: impl Into<AppId>, playtime_minutes: u32) -> Self {
        Self {
            name: name.into(),
            app_id: app_id.into(),
            playtime_minutes,
        }
    }

    /// Returns true if the game has been played at all.
    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.playtime_minutes > 0
    }

    /// Splits playtime into whole hours and remaining minutes.
    #[must_use]
    pub const fn playtime_hours_minutes(&self) -> (u32, u32) {
        (self.playtime_minutes / 60, self.playtime_minutes % 60)
    }

    /// Returns the folded name used by the indices.
    #[must_use]
    pub fn folded_name(&self) -> String {
        fold_name(&self.name)
    }
}

/// The account a library snapshot belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UserProfile {
    /// Display name.
    pub username: String,
    /// Free-form location string.
    pub location: String,
    /// 64-bit Steam id as a decimal string; empty when unknown.
    pub steam_id: String,
}

impl UserProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        location: impl Into<String>,
        steam_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            location: location.into(),
            steam_id: steam_id.into(),
        }
    }

    /// Returns true once a real account has been attached.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !self.steam_id.is_empty()
    }
}

/// Folds a game name for indexing and comparison.
///
/// Every index stores and compares folded names only, so insert and query
/// must both go through this function. Each character folds the same way
/// wherever it appears, so the fold of a prefix is a prefix of the fold.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}
