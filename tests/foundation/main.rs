//! Integration tests for Layer 0: Foundation
//!
//! Tests for error values and field-level diff helpers.

mod errors;
mod field_diff;
