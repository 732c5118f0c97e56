//! Integration tests for Layer 1: Model
//!
//! Tests for declaration identities, descriptions, and the frozen tree index.

mod declarations;
