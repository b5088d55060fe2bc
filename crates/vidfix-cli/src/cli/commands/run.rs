//! `vidfix run <doc> <dirs>...` – fix the document, then the files.
//!
//! Document first: its change list is printed before the rename report,
//! so the two can be cross-checked by eye.

use anyhow::Result;
use std::path::{Path, PathBuf};
use vidfix_core::sync;

use super::fix_doc::run_fix_doc;
use super::rename_files::print_report;

pub fn run_full(doc: &Path, output: Option<&Path>, dirs: &[PathBuf], ext: &str) -> Result<()> {
    tracing::debug!(
        "full run: document {} plus {} director(ies)",
        doc.display(),
        dirs.len()
    );
    run_fix_doc(doc, output)?;

    let report = sync::sync_directories(dirs, ext);
    print_report(&report);
    Ok(())
}
