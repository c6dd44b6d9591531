//! Integration tests for game records
//!
//! Tests app id parsing, playtime helpers, profiles, and name folding.

use gameshelf_foundation::{AppId, GameRecord, UserProfile, fold_name};

// =============================================================================
// AppId
// =============================================================================

#[test]
fn app_id_from_str_trims() {
    assert_eq!(" 620 ".parse::<AppId>().unwrap(), AppId(620));
    assert!("portal".parse::<AppId>().is_err());
    assert!("-1".parse::<AppId>().is_err());
}

#[test]
fn app_id_display_is_bare_number() {
    assert_eq!(AppId::new(220).to_string(), "220");
    assert_eq!(format!("{:>6}", AppId(7)), "     7");
    assert_eq!(format!("{:?}", AppId(7)), "AppId(7)");
}

#[test]
fn app_id_orders_numerically() {
    let mut ids = vec![AppId(400), AppId(70), AppId(220)];
    ids.sort();
    assert_eq!(ids, vec![AppId(70), AppId(220), AppId(400)]);
}

// =============================================================================
// GameRecord
// =============================================================================

#[test]
fn record_playtime_split() {
    let game = GameRecord::new("Half-Life 2", 220, 500);
    assert!(game.is_played());
    assert_eq!(game.playtime_hours_minutes(), (8, 20));
}

#[test]
fn unplayed_record() {
    let game = GameRecord::new("Portal", AppId(400), 0);
    assert!(!game.is_played());
    assert_eq!(game.playtime_hours_minutes(), (0, 0));
}

#[test]
fn record_folded_name() {
    let game = GameRecord::new("Half-Life", 100, 60);
    assert_eq!(game.folded_name(), "half-life");
}

// =============================================================================
// UserProfile
// =============================================================================

#[test]
fn default_profile_is_unknown() {
    assert!(!UserProfile::default().is_known());
}

#[test]
fn profile_with_steam_id_is_known() {
    let user = UserProfile::new("gordon", "Black Mesa", "76561197960287930");
    assert!(user.is_known());
    assert_eq!(user.username, "gordon");
}

// =============================================================================
// Name Folding
// =============================================================================

#[test]
fn folding_ignores_case() {
    assert_eq!(fold_name("PORTAL"), fold_name("portal"));
    assert_eq!(fold_name("Ōkami"), "ōkami");
}

#[test]
fn folding_keeps_punctuation_and_spaces() {
    assert_eq!(fold_name("Half-Life 2: Episode One"), "half-life 2: episode one");
}
