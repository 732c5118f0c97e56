//! Command-line arguments and the command runner.

use std::fs;
use std::path::{Path, PathBuf};

use apidelta_engine::{DiffConfig, ModuleInput, diff_module};
use apidelta_foundation::{Error, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::logging::Profile;
use crate::report::{render_json, render_text};

/// Output format of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented listing grouped by parent path.
    #[default]
    Text,
    /// The serialized module report.
    Json,
}

/// Compares two versions of a module interface.
#[derive(Debug, Parser)]
#[command(name = "apidelta", version)]
#[command(about = "Structural diff of two versions of a module interface", long_about = None)]
pub struct Cli {
    /// Interface file of the old version
    pub old: PathBuf,

    /// Interface file of the new version
    pub new: PathBuf,

    /// Module name used for path stripping and extension merging
    #[arg(short, long)]
    pub module: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Build trees one after the other
    #[arg(long)]
    pub sequential: bool,

    /// Keep every extension standalone
    #[arg(long)]
    pub no_merge: bool,

    /// Skip re-pairing of additions and removals
    #[arg(long)]
    pub no_consolidate: bool,

    /// Development logging profile
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON structured logs at info level
    #[arg(long, conflicts_with = "verbose")]
    pub log_json: bool,
}

impl Cli {
    /// The engine configuration selected by the flags.
    #[must_use]
    pub fn config(&self) -> DiffConfig {
        DiffConfig::default()
            .with_parallel(!self.sequential)
            .with_merge_extensions(!self.no_merge)
            .with_consolidate(!self.no_consolidate)
    }

    /// The logging profile selected by the flags.
    #[must_use]
    pub fn profile(&self) -> Profile {
        if self.log_json {
            Profile::Production
        } else if self.verbose {
            Profile::Development
        } else {
            Profile::Quiet
        }
    }
}

fn read_interface(path: &Path, module: &str) -> Result<ModuleInput> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(path.display().to_string(), e.to_string()))?;
    Ok(ModuleInput::new(module, text))
}

/// Reads both interface files, diffs them and renders the report.
///
/// # Errors
/// Returns an I/O error if a file cannot be read, or the error of the
/// pipeline if a tree cannot be built.
pub fn run(cli: &Cli) -> Result<String> {
    let old = read_interface(&cli.old, &cli.module)?;
    let new = read_interface(&cli.new, &cli.module)?;
    let report = diff_module(&old, &new, &cli.config())?;

    let counts = report.counts();
    info!(
        module = %report.module_name,
        additions = counts.additions,
        removals = counts.removals,
        modifications = counts.modifications,
        "diff complete"
    );

    match cli.format {
        Format::Text => Ok(render_text(&report)),
        Format::Json => render_json(&report),
    }
}
