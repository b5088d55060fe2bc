//! `vidfix fix-doc <doc>` – canonicalize video references in a document.

use anyhow::Result;
use std::path::Path;
use vidfix_core::rewrite;

/// How many changed values to echo before truncating the list.
const PREVIEW_LIMIT: usize = 20;

/// Rewrite the document and print the changed src values.
pub fn run_fix_doc(doc: &Path, output: Option<&Path>) -> Result<()> {
    let changes = rewrite::rewrite_document_file(doc, output)?;

    println!("[doc] {} video src value(s) changed", changes.len());
    for change in changes.iter().take(PREVIEW_LIMIT) {
        println!("  {}  ->  {}", change.original, change.replacement);
    }
    if changes.len() > PREVIEW_LIMIT {
        println!("  ...");
    }
    Ok(())
}
