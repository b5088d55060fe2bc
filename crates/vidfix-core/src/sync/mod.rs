//! Renames video files on disk to their canonical names.
//!
//! Best-effort batch: every detected difference triggers one rename
//! attempt, failures are collected per file and never stop the run.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::canonical;

/// Why a single file could not be renamed. The file keeps its old name.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The canonical name is already taken next to the file. Two source
    /// names canonicalizing to the same target is surfaced, not resolved.
    #[error("target name already exists: {0}")]
    TargetExists(PathBuf),
    /// The rename itself failed (permissions, file vanished mid-scan).
    #[error("rename failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A completed rename within one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub dir: PathBuf,
    pub from: String,
    pub to: String,
}

/// A file whose rename was attempted and failed.
#[derive(Debug)]
pub struct RenameFailure {
    pub path: PathBuf,
    pub error: RenameError,
}

/// Outcome of one synchronizer run across all roots.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub renamed: Vec<RenamedFile>,
    pub failures: Vec<RenameFailure>,
    pub skipped_roots: Vec<PathBuf>,
    pub unchanged: usize,
}

/// Walks `roots` and renames every file with the given extension whose
/// base name is not canonical. Missing roots are skipped and reported.
/// Files never move between directories.
///
/// `extension` is matched exactly and without the dot, e.g. `"mp4"`.
pub fn sync_directories(roots: &[PathBuf], extension: &str) -> SyncReport {
    let mut report = SyncReport::default();
    for root in roots {
        if !root.is_dir() {
            tracing::warn!("directory missing, skipped: {}", root.display());
            report.skipped_roots.push(root.clone());
            continue;
        }
        sync_root(root, extension, &mut report);
    }
    tracing::info!(
        "sync done: {} renamed, {} failed, {} unchanged, {} root(s) skipped",
        report.renamed.len(),
        report.failures.len(),
        report.unchanged,
        report.skipped_roots.len()
    );
    report
}

fn sync_root(root: &Path, extension: &str, report: &mut SyncReport) {
    // Collect matches first so renames cannot feed back into the walk.
    // sort_by_file_name keeps the order reproducible.
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!("walk error under {}: {}", root.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(entry.into_path());
        }
    }

    for path in files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("skipping non-UTF-8 file name: {}", path.display());
            continue;
        };
        let canonical_name = canonical::canonicalize_filename(name);
        if canonical_name == name {
            report.unchanged += 1;
            continue;
        }
        match rename_in_place(&path, &canonical_name) {
            Ok(()) => {
                tracing::info!("renamed {} -> {}", name, canonical_name);
                report.renamed.push(RenamedFile {
                    dir: path.parent().unwrap_or(Path::new("")).to_path_buf(),
                    from: name.to_string(),
                    to: canonical_name,
                });
            }
            Err(error) => {
                tracing::warn!("rename failed for {}: {}", path.display(), error);
                report.failures.push(RenameFailure { path, error });
            }
        }
    }
}

/// Renames `path` to `new_name` within its parent directory. An existing
/// target is an error: `fs::rename` would replace it silently.
fn rename_in_place(path: &Path, new_name: &str) -> Result<(), RenameError> {
    let target = path.with_file_name(new_name);
    if target.exists() {
        return Err(RenameError::TargetExists(target));
    }
    fs::rename(path, &target)?;
    Ok(())
}
