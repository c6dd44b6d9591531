//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use gameshelf_foundation::{AppId, Error, ErrorContext, ErrorKind};
use std::path::Path;

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_game_not_found() {
    let err = Error::game_not_found("zelda");
    assert!(matches!(err.kind, ErrorKind::GameNotFound(_)));
    assert!(err.is_not_found());
    assert!(format!("{err}").contains("zelda"));
}

#[test]
fn error_app_not_found() {
    let err = Error::app_not_found(AppId(999));
    assert!(matches!(err.kind, ErrorKind::AppNotFound(AppId(999))));
    assert!(err.is_not_found());
    assert!(format!("{err}").contains("999"));
}

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("count must be a positive integer");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(!err.is_not_found());
    assert!(format!("{err}").contains("positive integer"));
}

#[test]
fn error_persistence_names_path() {
    let err = Error::persistence(Path::new("data/games.json"), "permission denied");
    let msg = format!("{err}");
    assert!(msg.contains("data/games.json"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn error_malformed_names_origin() {
    let err = Error::malformed("relations.json", "expected value at line 1");
    match &err.kind {
        ErrorKind::MalformedData { origin, message } => {
            assert_eq!(origin, "relations.json");
            assert!(message.contains("line 1"));
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::new(ErrorKind::Internal("unreachable state".to_string()));
    assert!(err.context.is_none());
    assert!(format!("{err}").contains("unreachable state"));
}

#[test]
fn error_with_context() {
    let err = Error::game_not_found("zelda")
        .with_context(ErrorContext::new().with_source("'search zelda'"));
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("'search zelda'"));
    assert_eq!(format!("{context}"), "in 'search zelda'");
}

#[test]
fn empty_context_displays_nothing() {
    assert_eq!(format!("{}", ErrorContext::default()), "");
}
