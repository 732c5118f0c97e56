//! apidelta - Structural diff of module interfaces
//!
//! This crate re-exports all layers of apidelta for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: apidelta_runtime    - CLI, logging setup, report output
//! Layer 3: apidelta_engine     - Alignment, consolidation, metrics, pipeline
//! Layer 2: apidelta_parser     - Lexer, declaration parser, extension merger
//! Layer 1: apidelta_model      - Declaration kinds, frozen interface, tree index
//! Layer 0: apidelta_foundation - Error types, field-level diff helpers
//! ```

pub use apidelta_engine as engine;
pub use apidelta_foundation as foundation;
pub use apidelta_model as model;
pub use apidelta_parser as parser;
pub use apidelta_runtime as runtime;
