//! Command-line configuration.
//!
//! With no arguments the tool rewrites `src/utils/templates.js` in place.

use std::path::PathBuf;

use clap::Parser;

use crate::consts::DEFAULT_TARGET_PATH;

#[derive(Parser, Debug)]
#[command(name = "zindex-fix", about = "Rewrite placeholder zIndex values in generated shape templates")]
pub struct Cli {
    /// Template file to rewrite.
    #[arg(long, default_value = DEFAULT_TARGET_PATH)]
    pub path: PathBuf,

    /// Report what would change without writing.
    #[arg(long, default_value_t = false, conflicts_with = "atomic")]
    pub dry_run: bool,

    /// Stage the output in a temp file and rename it over the target.
    #[arg(long, default_value_t = false)]
    pub atomic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and overwrite the target.
    InPlace,
    /// Temp file plus rename.
    Atomic,
    /// Never write.
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub mode: WriteMode,
}

impl Config {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self { path: path.into(), mode }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mode = if cli.dry_run {
            WriteMode::DryRun
        } else if cli.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        };
        Self { path: cli.path, mode }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_PATH, WriteMode::InPlace)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
