use crate::apply::{BatchSummary, RenameOutcome};
use crate::planner::PlanStats;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RenameEvent {
    InvalidDirectory { path: PathBuf },
    ListingFailed { path: PathBuf, reason: String },
    NoImages { path: PathBuf },
    Started {
        count: usize,
        preview: bool,
        stats: PlanStats,
    },
    Entry {
        from: String,
        to: String,
        outcome: RenameOutcome,
    },
    Finished { summary: BatchSummary },
}

pub trait Reporter {
    fn report(&mut self, event: &RenameEvent);
}

/// Human-readable, one line per event.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &RenameEvent) {
        // a closed or broken sink must not stop the batch
        let _ = writeln!(self.out, "{}", format_event(event));
    }
}

pub fn format_event(event: &RenameEvent) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    match event {
        RenameEvent::InvalidDirectory { path } => {
            format!("error: directory does not exist: {}", path.display())
        }
        RenameEvent::ListingFailed { path, reason } => {
            format!("error: could not read directory {}: {reason}", path.display())
        }
        RenameEvent::NoImages { path } => format!("no images found in {}", path.display()),
        RenameEvent::Started {
            count,
            preview,
            stats,
        } => {
            let mode = if *preview { "previewing" } else { "renaming" };
            format!(
                "found {count} images, {mode}:\n\
                 scanned={} images={} non_image_skip={} non_file_skip={}\n{rule}",
                stats.scanned_entries,
                stats.image_files,
                stats.skipped_non_image,
                stats.skipped_non_file
            )
        }
        RenameEvent::Entry { from, to, outcome } => match outcome {
            RenameOutcome::Renamed => format!("[OK]      {from} -> {to}"),
            RenameOutcome::AlreadyExists => format!("[SKIP]    {from} -> {to} (target exists)"),
            RenameOutcome::Failed { reason } => {
                format!("[FAIL]    {from} -> {to} (error: {reason})")
            }
            RenameOutcome::Previewed => format!("[PREVIEW] {from} -> {to}"),
        },
        RenameEvent::Finished { summary } => format!("{rule}\ndone. {summary}"),
    }
}

/// One JSON object per line, for scripts.
#[derive(Debug)]
pub struct JsonLinesReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&mut self, event: &RenameEvent) {
        if serde_json::to_writer(&mut self.out, event).is_ok() {
            let _ = self.out.write_all(b"\n");
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<RenameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &RenameOutcome)> {
        self.events.iter().filter_map(|event| match event {
            RenameEvent::Entry { from, to, outcome } => Some((from.as_str(), to.as_str(), outcome)),
            _ => None,
        })
    }
}

impl Reporter for EventLog {
    fn report(&mut self, event: &RenameEvent) {
        self.events.push(event.clone());
    }
}
