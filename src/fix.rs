//! A single read-rewrite-write pass over the configured target.

use tracing::{info, warn};

use crate::config::{Config, WriteMode};
use crate::error::FixError;
use crate::rewrite::{POLICY_SUMMARY, RewriteReport, rewrite_document};
use crate::target::{read_source, write_atomic, write_in_place};

/// Rewrite the configured file and return what was applied.
///
/// The file is written even when nothing changed, except in
/// [`WriteMode::DryRun`].
///
/// # Errors
///
/// Any read or write failure, as a [`FixError`] naming the path.
pub fn run(config: &Config) -> Result<RewriteReport, FixError> {
    let path = config.path.as_path();
    let source = read_source(path)?;
    let rewrite = rewrite_document(&source);
    let report = rewrite.report;

    if report.recognized() == 0 {
        warn!(path = %path.display(), fragments = report.fragments, "no recognized shapes in target");
    }

    match config.mode {
        WriteMode::InPlace => write_in_place(path, &rewrite.text)?,
        WriteMode::Atomic => write_atomic(path, &rewrite.text)?,
        WriteMode::DryRun => {
            info!(path = %path.display(), "dry run; target not written");
        }
    }

    info!(
        path = %path.display(),
        fragments = report.fragments,
        rewritten = report.rewritten(),
        text = report.text,
        circle = report.circle,
        rectangle = report.rectangle,
        missing_dimensions = report.missing_dimensions,
        unclassified = report.unclassified,
        "zIndex rewrite complete"
    );

    Ok(report)
}

/// Lines the binary prints to stdout after a run.
///
/// A written run gets the fixed policy summary whatever actually changed; a
/// dry run gets the applied count instead.
#[must_use]
pub fn summary_lines(config: &Config, report: &RewriteReport) -> Vec<String> {
    match config.mode {
        WriteMode::DryRun => vec![format!(
            "Dry run: {} of {} shape fragments would change",
            report.rewritten(),
            report.fragments
        )],
        WriteMode::InPlace | WriteMode::Atomic => POLICY_SUMMARY.iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
#[path = "fix_test.rs"]
mod tests;
