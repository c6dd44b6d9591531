//! Integration tests for name indexing
//!
//! Tests prefix search, exact lookup, rebuilds, and index invariants.

use gameshelf_foundation::{GameRecord, UserProfile, fold_name};
use gameshelf_storage::{GameStore, NameIndex, PrefixTree};
use proptest::prelude::*;

fn valve_games() -> Vec<GameRecord> {
    vec![
        GameRecord::new("Half-Life", 100, 60),
        GameRecord::new("Half-Life 2", 220, 500),
        GameRecord::new("Portal", 400, 0),
    ]
}

// =============================================================================
// Prefix Search
// =============================================================================

#[test]
fn search_and_lookup_scenario() {
    let index = NameIndex::build(&valve_games());

    assert_eq!(index.search_by_prefix("half"), vec![0, 1]);
    assert_eq!(index.lookup_exact("portal"), Some(2));
}

#[test]
fn prefix_search_is_case_insensitive() {
    let index = NameIndex::build(&valve_games());
    assert_eq!(index.search_by_prefix("HALF-LIFE "), vec![1]);
    assert_eq!(index.search_by_prefix("pOr"), vec![2]);
}

#[test]
fn empty_prefix_matches_everything() {
    let index = NameIndex::build(&valve_games());
    assert_eq!(index.search_by_prefix(""), vec![0, 1, 2]);
}

#[test]
fn unmatched_prefix_is_empty() {
    let index = NameIndex::build(&valve_games());
    assert!(index.search_by_prefix("zelda").is_empty());
    assert!(index.search_by_prefix("half-life 3").is_empty());
}

#[test]
fn prefix_through_non_ascii_names() {
    let mut tree = PrefixTree::new();
    tree.insert("Ōkami HD", 0);
    tree.insert("Okami", 1);

    assert_eq!(tree.search_by_prefix("ō"), vec![0]);
    assert_eq!(tree.search_by_prefix("o"), vec![1]);
}

#[test]
fn greek_prefix_matches_exact_hit() {
    let index = NameIndex::build(&[GameRecord::new("ΟΔΟΣΑ", 1, 0)]);

    assert_eq!(index.lookup_exact("οδοσα"), Some(0));
    assert_eq!(index.search_by_prefix("ΟΔΟΣ"), vec![0]);
    assert_eq!(index.search_by_prefix("οδοσ"), vec![0]);
}

// =============================================================================
// Exact Lookup
// =============================================================================

#[test]
fn exact_lookup_requires_full_name() {
    let index = NameIndex::build(&valve_games());
    assert_eq!(index.lookup_exact("HALF-LIFE 2"), Some(1));
    assert_eq!(index.lookup_exact("half"), None);
    assert_eq!(index.lookup_exact(""), None);
}

#[test]
fn duplicate_names_keep_every_position_in_trie() {
    let games = vec![
        GameRecord::new("Portal", 400, 0),
        GameRecord::new("portal", 401, 0),
    ];
    let index = NameIndex::build(&games);

    assert_eq!(index.search_by_prefix("portal"), vec![0, 1]);
    assert_eq!(index.lookup_exact("Portal"), Some(1));
}

// =============================================================================
// Rebuild
// =============================================================================

#[test]
fn replace_drops_stale_positions() {
    let mut store = GameStore::from_records(valve_games(), UserProfile::default());
    store.replace(
        vec![GameRecord::new("Portal 2", 620, 30)],
        UserProfile::default(),
    );

    assert_eq!(store.len(), 1);
    assert_eq!(store.index().len(), 1);
    assert!(store.search("half").is_empty());
    assert!(store.lookup_exact("portal").is_none());
    assert_eq!(store.search("portal")[0].name, "Portal 2");
}

#[test]
fn clear_resets_both_halves() {
    let mut index = NameIndex::build(&valve_games());
    index.clear();

    assert!(index.is_empty());
    assert!(index.search_by_prefix("").is_empty());
    assert_eq!(index.lookup_exact("portal"), None);
}

// =============================================================================
// Properties
// =============================================================================

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-CΣσİ ]{0,6}", 0..30)
}

proptest! {
    #[test]
    fn empty_prefix_lists_each_position_once(names in names()) {
        let mut index = NameIndex::new();
        for (position, name) in names.iter().enumerate() {
            index.insert(name, position);
        }

        let expected: Vec<usize> = (0..names.len()).collect();
        prop_assert_eq!(index.search_by_prefix(""), expected);
    }

    #[test]
    fn exact_matches_appear_in_prefix_results(names in names(), cut in 0usize..7) {
        let mut index = NameIndex::new();
        for (position, name) in names.iter().enumerate() {
            index.insert(name, position);
        }

        for name in &names {
            let Some(position) = index.lookup_exact(name) else {
                continue;
            };
            let prefix: String = name.chars().take(cut).collect();
            prop_assert!(index.search_by_prefix(&prefix).contains(&position));
        }
    }

    #[test]
    fn prefix_results_are_sorted_and_match(names in names(), prefix in "[a-c]{0,3}") {
        let mut index = NameIndex::new();
        for (position, name) in names.iter().enumerate() {
            index.insert(name, position);
        }

        let found = index.search_by_prefix(&prefix);
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
        for position in found {
            prop_assert!(fold_name(&names[position]).starts_with(&prefix));
        }
    }
}
