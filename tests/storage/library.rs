//! Integration tests for library state
//!
//! Tests relate/recommend/undo flows, refetch behavior, and not-found errors.

use gameshelf_foundation::{AppId, ErrorKind, GameRecord, UserProfile};
use gameshelf_storage::{Library, RelateOutcome, SortKey, UndoAction};

fn valve_library() -> Library {
    let mut library = Library::new();
    library.replace_games(
        vec![
            GameRecord::new("Half-Life", 100, 60),
            GameRecord::new("Half-Life 2", 220, 500),
            GameRecord::new("Portal", 400, 0),
        ],
        UserProfile::new("gordon", "Unknown", "gordon"),
    );
    library
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn search_returns_store_order() {
    let library = valve_library();
    let names: Vec<_> = library.search("half").iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Half-Life", "Half-Life 2"]);
}

#[test]
fn lookup_missing_name_is_not_found() {
    let library = valve_library();
    let err = library.lookup_exact("zelda").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::GameNotFound(ref name) if name == "zelda"));
}

#[test]
fn resolve_prefers_id_then_name_then_prefix() {
    let library = valve_library();
    assert_eq!(library.resolve("400").unwrap().name, "Portal");
    assert_eq!(library.resolve("half-life").unwrap().app_id, AppId(100));
    assert_eq!(library.resolve("half-life 2").unwrap().app_id, AppId(220));
    assert_eq!(library.resolve("port").unwrap().app_id, AppId(400));
    assert!(library.resolve("999").unwrap_err().is_not_found());
}

#[test]
fn list_by_playtime() {
    let library = valve_library();
    let ids: Vec<_> = library
        .list_all(SortKey::Playtime)
        .iter()
        .map(|g| g.app_id)
        .collect();
    assert_eq!(ids, vec![AppId(220), AppId(100), AppId(400)]);
}

// =============================================================================
// Relate / Recommend / Undo
// =============================================================================

#[test]
fn relate_recommend_undo_flow() {
    let mut library = valve_library();

    assert_eq!(
        library.relate(AppId(100), AppId(220)).unwrap(),
        RelateOutcome::Created
    );
    assert_eq!(library.recommend(AppId(100), 5).unwrap(), vec![AppId(220)]);
    assert_eq!(library.recommend(AppId(220), 5).unwrap(), vec![AppId(100)]);

    let undone = library.undo().unwrap();
    assert_eq!(
        undone,
        UndoAction::AddRelation {
            first: AppId(100),
            second: AppId(220),
        }
    );
    assert!(library.recommend(AppId(100), 5).unwrap().is_empty());

    assert!(library.undo().is_none());
    assert!(library.relations().is_empty());
}

#[test]
fn relate_unknown_game_is_rejected() {
    let mut library = valve_library();
    let err = library.relate(AppId(100), AppId(999)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AppNotFound(AppId(999))));
    assert!(library.relations().is_empty());
    assert!(library.undo_stack().is_empty());
}

#[test]
fn repeated_and_self_relations_are_not_undoable() {
    let mut library = valve_library();
    library.relate(AppId(100), AppId(400)).unwrap();

    assert_eq!(
        library.relate(AppId(400), AppId(100)).unwrap(),
        RelateOutcome::AlreadyRelated
    );
    assert_eq!(
        library.relate(AppId(400), AppId(400)).unwrap(),
        RelateOutcome::SelfRelation
    );
    assert_eq!(library.undo_stack().len(), 1);
}

#[test]
fn undo_depth_bounds_history() {
    let mut library = Library::with_undo_depth(1);
    library.replace_games(
        vec![
            GameRecord::new("A", 1, 0),
            GameRecord::new("B", 2, 0),
            GameRecord::new("C", 3, 0),
        ],
        UserProfile::default(),
    );
    library.relate(AppId(1), AppId(2)).unwrap();
    library.relate(AppId(2), AppId(3)).unwrap();

    assert!(library.undo().is_some());
    assert!(library.undo().is_none());
    assert!(library.relations().has_relation(AppId(1), AppId(2)));
    assert!(!library.relations().has_relation(AppId(2), AppId(3)));
}

// =============================================================================
// Refetch
// =============================================================================

#[test]
fn relations_survive_refetch() {
    let mut library = valve_library();
    library.relate(AppId(220), AppId(400)).unwrap();

    library.replace_games(
        vec![
            GameRecord::new("Portal", 400, 15),
            GameRecord::new("Half-Life 2", 220, 520),
        ],
        UserProfile::new("gordon", "Unknown", "gordon"),
    );

    assert_eq!(library.store().lookup_exact("portal").unwrap().playtime_minutes, 15);
    assert_eq!(library.recommend(AppId(400), 5).unwrap(), vec![AppId(220)]);
    assert_eq!(library.undo_stack().len(), 1);
}

#[test]
fn removed_game_keeps_edges_but_cannot_be_queried() {
    let mut library = valve_library();
    library.relate(AppId(100), AppId(220)).unwrap();
    library.replace_games(vec![GameRecord::new("Half-Life 2", 220, 500)], UserProfile::default());

    assert!(library.relations().has_relation(AppId(100), AppId(220)));
    assert_eq!(library.recommend(AppId(220), 5).unwrap(), vec![AppId(100)]);
    assert!(library.recommend(AppId(100), 5).unwrap_err().is_not_found());
}
