//! Error types and field-level diff helpers for apidelta.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`FieldDiff`] - Builder for the human-readable field-level change lines
//!   reported for a modified declaration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod field_diff;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use field_diff::{FieldDiff, diff_set, diff_value};
