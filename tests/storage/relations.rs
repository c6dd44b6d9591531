//! Integration tests for the relation graph
//!
//! Tests symmetry, idempotence, removal, limits, and normalization.

use gameshelf_foundation::AppId;
use gameshelf_storage::RelationGraph;
use proptest::prelude::*;

// =============================================================================
// Adding Relations
// =============================================================================

#[test]
fn relation_is_visible_from_both_sides() {
    let mut graph = RelationGraph::new();
    assert!(graph.add_relation(AppId(100), AppId(220)));

    assert!(graph.has_relation(AppId(100), AppId(220)));
    assert!(graph.has_relation(AppId(220), AppId(100)));
    assert_eq!(graph.related_games(AppId(100), 5), vec![AppId(220)]);
    assert_eq!(graph.related_games(AppId(220), 5), vec![AppId(100)]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn reversed_add_is_idempotent() {
    let mut once = RelationGraph::new();
    once.add_relation(AppId(1), AppId(2));

    let mut twice = RelationGraph::new();
    twice.add_relation(AppId(1), AppId(2));
    assert!(!twice.add_relation(AppId(2), AppId(1)));

    assert_eq!(once, twice);
}

#[test]
fn self_relation_changes_nothing() {
    let mut graph = RelationGraph::new();
    assert!(!graph.add_relation(AppId(7), AppId(7)));
    assert!(graph.is_empty());
    assert!(!graph.contains(AppId(7)));
}

// =============================================================================
// Removing Relations
// =============================================================================

#[test]
fn remove_drops_both_directions() {
    let mut graph = RelationGraph::new();
    graph.add_relation(AppId(1), AppId(2));
    graph.add_relation(AppId(1), AppId(3));

    assert!(graph.remove_relation(AppId(2), AppId(1)));
    assert!(!graph.has_relation(AppId(1), AppId(2)));
    assert!(!graph.contains(AppId(2)));
    assert_eq!(graph.related_games(AppId(1), 5), vec![AppId(3)]);
}

#[test]
fn removing_missing_edge_is_noop() {
    let mut graph = RelationGraph::new();
    graph.add_relation(AppId(1), AppId(2));
    let before = graph.clone();

    assert!(!graph.remove_relation(AppId(1), AppId(3)));
    assert!(!graph.remove_relation(AppId(8), AppId(9)));
    assert_eq!(graph, before);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn related_games_keeps_insertion_order_and_limit() {
    let mut graph = RelationGraph::new();
    for other in [5, 3, 9, 4] {
        graph.add_relation(AppId(1), AppId(other));
    }

    assert_eq!(graph.related_games(AppId(1), 2), vec![AppId(5), AppId(3)]);
    assert_eq!(graph.related_games(AppId(1), 10).len(), 4);
    assert!(graph.related_games(AppId(1), 0).is_empty());
    assert!(graph.related_games(AppId(42), 5).is_empty());
}

#[test]
fn from_rows_normalizes_asymmetric_input() {
    let graph = RelationGraph::from_rows(vec![
        (AppId(1), vec![AppId(2), AppId(1)]),
        (AppId(3), vec![]),
    ]);

    assert!(graph.has_relation(AppId(2), AppId(1)));
    assert!(!graph.contains(AppId(3)));
    assert_eq!(graph.len(), 2);
}

#[test]
fn graph_equality_ignores_order() {
    let mut a = RelationGraph::new();
    a.add_relation(AppId(1), AppId(2));
    a.add_relation(AppId(3), AppId(4));

    let mut b = RelationGraph::new();
    b.add_relation(AppId(4), AppId(3));
    b.add_relation(AppId(2), AppId(1));

    assert_eq!(a, b);
}

// =============================================================================
// Properties
// =============================================================================

fn edges() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..15, 0u32..15), 0..40)
}

fn graph_of(edges: &[(u32, u32)]) -> RelationGraph {
    let mut graph = RelationGraph::new();
    for &(a, b) in edges {
        graph.add_relation(AppId(a), AppId(b));
    }
    graph
}

proptest! {
    #[test]
    fn add_both_ways_equals_add_once(existing in edges(), a in 0u32..15, b in 0u32..15) {
        let mut once = graph_of(&existing);
        once.add_relation(AppId(a), AppId(b));

        let mut twice = graph_of(&existing);
        twice.add_relation(AppId(a), AppId(b));
        twice.add_relation(AppId(b), AppId(a));

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn add_then_remove_round_trips(existing in edges(), a in 0u32..15, b in 0u32..15) {
        let mut graph = graph_of(&existing);
        prop_assume!(!graph.has_relation(AppId(a), AppId(b)));
        let before = graph.clone();

        graph.add_relation(AppId(a), AppId(b));
        graph.remove_relation(AppId(a), AppId(b));

        prop_assert_eq!(graph, before);
    }

    #[test]
    fn every_edge_is_symmetric(existing in edges()) {
        let graph = graph_of(&existing);
        for (id, related) in graph.iter() {
            prop_assert!(!related.is_empty());
            for &other in related {
                prop_assert_ne!(id, other);
                prop_assert!(graph.has_relation(other, id));
            }
        }
    }
}
