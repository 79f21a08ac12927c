mod apply;
mod config;
mod planner;
mod report;

pub use apply::{apply_plan, rename, rename_entry, BatchSummary, RenameOutcome};
pub use config::{resolve_directory, RenameOptions};
pub use planner::{
    collect_image_files, generate_plan, is_image_name, sequence_name, split_extension,
    PlanStats, RenameCandidate, RenameError, RenamePlan,
};
pub use report::{
    format_event, ConsoleReporter, EventLog, JsonLinesReporter, RenameEvent, Reporter,
};

pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".svg",
];
pub const DEFAULT_PREFIX: &str = "image";
pub const DEFAULT_START_NUM: i64 = 1;
pub const DEFAULT_NUM_DIGITS: usize = 4;
