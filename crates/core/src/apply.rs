use crate::config::RenameOptions;
use crate::planner::{generate_plan, RenameError, RenamePlan};
use crate::report::{RenameEvent, Reporter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed,
    AlreadyExists,
    Failed { reason: String },
    Previewed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub found: usize,
    pub renamed: usize,
    pub skipped_exists: usize,
    pub failed: usize,
    pub previewed: usize,
    pub aborted: bool,
}

impl BatchSummary {
    fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::AlreadyExists => self.skipped_exists += 1,
            RenameOutcome::Failed { .. } => self.failed += 1,
            RenameOutcome::Previewed => self.previewed += 1,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found={} renamed={} skipped={} failed={} previewed={}",
            self.found, self.renamed, self.skipped_exists, self.failed, self.previewed
        )
    }
}

/// Runs one batch end to end. Every failure is reported through `reporter`;
/// nothing is returned as an error.
pub fn rename(options: &RenameOptions, reporter: &mut dyn Reporter) -> BatchSummary {
    let plan = match generate_plan(options) {
        Ok(plan) => plan,
        Err(RenameError::NotADirectory(path)) => {
            reporter.report(&RenameEvent::InvalidDirectory { path });
            return BatchSummary {
                aborted: true,
                ..BatchSummary::default()
            };
        }
        Err(RenameError::ReadDir { path, source }) => {
            reporter.report(&RenameEvent::ListingFailed {
                path,
                reason: source.to_string(),
            });
            return BatchSummary {
                aborted: true,
                ..BatchSummary::default()
            };
        }
    };

    if plan.is_empty() {
        reporter.report(&RenameEvent::NoImages {
            path: plan.directory,
        });
        return BatchSummary::default();
    }

    reporter.report(&RenameEvent::Started {
        count: plan.candidates.len(),
        preview: options.preview,
        stats: plan.stats.clone(),
    });
    let summary = apply_plan(&plan, options.preview, reporter);
    reporter.report(&RenameEvent::Finished { summary });
    summary
}

pub fn apply_plan(plan: &RenamePlan, preview: bool, reporter: &mut dyn Reporter) -> BatchSummary {
    let mut summary = BatchSummary {
        found: plan.candidates.len(),
        ..BatchSummary::default()
    };

    for candidate in &plan.candidates {
        let outcome = if target_exists(&candidate.target_path) {
            RenameOutcome::AlreadyExists
        } else if preview {
            RenameOutcome::Previewed
        } else {
            rename_entry(&candidate.original_path, &candidate.target_path)
        };

        summary.record(&outcome);
        reporter.report(&RenameEvent::Entry {
            from: candidate.original_name.clone(),
            to: candidate.target_name.clone(),
            outcome,
        });
    }

    summary
}

/// Renames `from` to `to` unless something already occupies `to`.
pub fn rename_entry(from: &Path, to: &Path) -> RenameOutcome {
    if target_exists(to) {
        return RenameOutcome::AlreadyExists;
    }

    match fs::rename(from, to) {
        Ok(()) => RenameOutcome::Renamed,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => RenameOutcome::AlreadyExists,
        Err(err) => RenameOutcome::Failed {
            reason: err.to_string(),
        },
    }
}

// symlink_metadata so a dangling link at the target still blocks the rename
fn target_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
