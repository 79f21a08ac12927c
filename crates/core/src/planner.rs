use crate::config::RenameOptions;
use crate::IMAGE_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("directory does not exist: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("could not read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameCandidate {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub original_name: String,
    pub target_name: String,
    pub index: i128,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    pub scanned_entries: usize,
    pub image_files: usize,
    pub skipped_non_image: usize,
    pub skipped_non_file: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub directory: PathBuf,
    pub candidates: Vec<RenameCandidate>,
    pub stats: PlanStats,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub fn generate_plan(options: &RenameOptions) -> Result<RenamePlan, RenameError> {
    let directory = options.directory.as_path();
    if !directory.is_dir() {
        return Err(RenameError::NotADirectory(directory.to_path_buf()));
    }

    let mut stats = PlanStats::default();
    let image_files = collect_image_files(directory, &mut stats)?;

    let mut candidates = Vec::with_capacity(image_files.len());
    // i128 holds every start_num + position without wrapping
    for (position, original_path) in image_files.into_iter().enumerate() {
        let index = i128::from(options.start_num) + position as i128;
        let original_name = file_name_lossy(&original_path);
        let target_name = sequence_name(
            &options.prefix,
            index,
            options.num_digits,
            split_extension(&original_name),
        );
        candidates.push(RenameCandidate {
            target_path: directory.join(&target_name),
            original_path,
            original_name,
            target_name,
            index,
        });
    }

    Ok(RenamePlan {
        directory: directory.to_path_buf(),
        candidates,
        stats,
    })
}

/// Immediate children of `root` that carry an image extension and resolve
/// to regular files, ordered by file name bytes.
pub fn collect_image_files(
    root: &Path,
    stats: &mut PlanStats,
) -> Result<Vec<PathBuf>, RenameError> {
    let read_err = |source: io::Error| RenameError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut out = Vec::new();
    for entry in fs::read_dir(root).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        stats.scanned_entries += 1;

        if !is_image_name(&entry.file_name().to_string_lossy()) {
            stats.skipped_non_image += 1;
            continue;
        }
        // follows symlinks, so a link to a regular file still counts
        if !fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
            stats.skipped_non_file += 1;
            continue;
        }

        stats.image_files += 1;
        out.push(path);
    }

    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

pub fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Extension including the dot, in its on-disk case. Leading dots belong
/// to the stem, so ".png" has no extension.
pub fn split_extension(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(pos) => &name[stem_start + pos..],
        None => "",
    }
}

/// `num_digits` is a minimum width that counts the sign, so -1 at width 4
/// becomes "-001".
pub fn sequence_name(prefix: &str, index: i128, num_digits: usize, extension: &str) -> String {
    let sign = if index < 0 { "-" } else { "" };
    let digits = index.unsigned_abs().to_string();
    let pad = num_digits.saturating_sub(sign.len() + digits.len());
    format!("{prefix}_{sign}{}{digits}{extension}", "0".repeat(pad))
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_default()
}
