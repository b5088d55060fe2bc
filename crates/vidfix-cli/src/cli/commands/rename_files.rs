//! `vidfix rename-files <dirs>...` – rename video files to canonical names.

use std::path::PathBuf;
use vidfix_core::sync::{self, SyncReport};

/// Scan the directories and print one line per rename, failure or skip.
pub fn run_rename_files(dirs: &[PathBuf], ext: &str) {
    let report = sync::sync_directories(dirs, ext);
    print_report(&report);
}

pub(super) fn print_report(report: &SyncReport) {
    for root in &report.skipped_roots {
        println!("[files] directory missing, skipped: {}", root.display());
    }
    for renamed in &report.renamed {
        println!("[files] {}  ->  {}", renamed.from, renamed.to);
    }
    for failure in &report.failures {
        println!(
            "[files] rename failed for {}: {}",
            failure.path.display(),
            failure.error
        );
    }
    println!(
        "[files] {} renamed, {} failed, {} already canonical",
        report.renamed.len(),
        report.failures.len(),
        report.unchanged
    );
}
