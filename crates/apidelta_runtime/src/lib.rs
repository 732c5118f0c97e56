//! Runtime surface for apidelta.
//!
//! This crate provides:
//! - [`cli`] - Command-line arguments and the runner behind the `apidelta` binary
//! - [`logging`] - Subscriber installation and in-memory event capture
//! - [`report`] - Text and JSON rendering of module reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod logging;
pub mod report;

pub use cli::{Cli, Format, run};
pub use logging::{Profile, init};
pub use report::{render_json, render_text};
