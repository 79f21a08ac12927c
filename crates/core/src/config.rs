use crate::{DEFAULT_NUM_DIGITS, DEFAULT_PREFIX, DEFAULT_START_NUM};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOptions {
    pub directory: PathBuf,
    pub prefix: String,
    pub start_num: i64,
    pub num_digits: usize,
    pub preview: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            start_num: DEFAULT_START_NUM,
            num_digits: DEFAULT_NUM_DIGITS,
            preview: false,
        }
    }
}

impl RenameOptions {
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

/// Falls back to the process working directory, read at call time.
pub fn resolve_directory(directory: Option<PathBuf>) -> Result<PathBuf> {
    match directory {
        Some(dir) => Ok(dir),
        None => env::current_dir().context("could not read the current working directory"),
    }
}
