//! Structural diff engine for apidelta.
//!
//! This crate provides:
//! - [`align`] - Matching old and new declarations by kind, path and signature
//! - [`consolidate`] - Re-pairing leftover additions and removals
//! - [`Metrics`] - Declaration counts per kind
//! - [`diff_module`] - The whole pipeline for one module

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod align;
pub mod change;
pub mod config;
pub mod consolidate;
pub mod metrics;
pub mod pipeline;

pub use align::{Alignment, Pending, Side, align};
pub use change::{ChangeKind, ChangeRecord};
pub use config::DiffConfig;
pub use consolidate::consolidate;
pub use metrics::{MetricDelta, Metrics, MetricsPair};
pub use pipeline::{
    ChangeCounts, ModuleInput, ModuleReport, diff_interfaces, diff_module, diff_modules,
};
