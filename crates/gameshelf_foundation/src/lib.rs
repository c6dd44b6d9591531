//! Core types and error handling for gameshelf.
//!
//! This crate provides:
//! - [`AppId`] - Stable external game identifiers
//! - [`GameRecord`] - One entry of a fetched game library
//! - [`UserProfile`] - The account a library belongs to
//! - [`fold_name`] - Case folding shared by every name index
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod record;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use record::{AppId, GameRecord, UserProfile, fold_name};
