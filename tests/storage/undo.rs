//! Integration tests for the undo log
//!
//! Tests bounded eviction, LIFO order, and reverting against a graph.

use gameshelf_foundation::AppId;
use gameshelf_storage::{DEFAULT_UNDO_DEPTH, RelationGraph, UndoAction, UndoStack};
use proptest::prelude::*;

fn add(first: u32, second: u32) -> UndoAction {
    UndoAction::AddRelation {
        first: AppId(first),
        second: AppId(second),
    }
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn default_depth_is_ten() {
    assert_eq!(UndoStack::default().capacity(), DEFAULT_UNDO_DEPTH);
    assert_eq!(DEFAULT_UNDO_DEPTH, 10);
}

#[test]
fn overflow_evicts_oldest() {
    let mut stack = UndoStack::new(3);
    for i in 0..4 {
        stack.push(add(i, i + 100));
    }

    assert_eq!(stack.len(), 3);
    let remaining: Vec<_> = stack.iter_rev().copied().collect();
    assert_eq!(remaining, vec![add(3, 103), add(2, 102), add(1, 101)]);
}

#[test]
fn zero_capacity_records_nothing() {
    let mut stack = UndoStack::new(0);
    stack.push(add(1, 2));
    assert!(stack.is_empty());
    assert!(stack.pop().is_none());
}

// =============================================================================
// Reverting
// =============================================================================

#[test]
fn relate_then_undo_scenario() {
    let mut graph = RelationGraph::new();
    let mut stack = UndoStack::default();

    graph.add_relation(AppId(100), AppId(220));
    stack.push(add(100, 220));
    assert_eq!(graph.related_games(AppId(100), 5), vec![AppId(220)]);

    assert_eq!(stack.pop_and_revert(&mut graph), Some(add(100, 220)));
    assert!(!graph.has_relation(AppId(100), AppId(220)));
    assert!(graph.is_empty());

    let before = graph.clone();
    assert_eq!(stack.pop_and_revert(&mut graph), None);
    assert_eq!(graph, before);
}

#[test]
fn reverting_a_missing_edge_is_noop() {
    let mut graph = RelationGraph::new();
    graph.add_relation(AppId(5), AppId(6));

    add(1, 2).revert(&mut graph);
    assert!(graph.has_relation(AppId(5), AppId(6)));
}

#[test]
fn peek_does_not_consume() {
    let mut stack = UndoStack::new(2);
    stack.push(add(1, 2));
    assert_eq!(stack.peek(), Some(&add(1, 2)));
    assert_eq!(stack.len(), 1);
}

#[test]
fn action_describes_both_games() {
    let text = add(100, 220).to_string();
    assert!(text.contains("100"));
    assert!(text.contains("220"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn keeps_most_recent_and_pops_newest_first(capacity in 1usize..12, extra in 1usize..12) {
        let mut stack = UndoStack::new(capacity);
        let total = capacity + extra;
        for i in 0..total {
            stack.push(add(u32::try_from(i).unwrap(), 1000));
        }
        prop_assert_eq!(stack.len(), capacity);

        let mut popped = Vec::new();
        while let Some(UndoAction::AddRelation { first, .. }) = stack.pop() {
            popped.push(first.get() as usize);
        }
        let expected: Vec<usize> = (total - capacity..total).rev().collect();
        prop_assert_eq!(popped, expected);
    }
}
