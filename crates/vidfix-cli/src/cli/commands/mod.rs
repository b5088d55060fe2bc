//! CLI command handlers. Each command is in its own file.

mod fix_doc;
mod rename_files;
mod run;

pub use fix_doc::run_fix_doc;
pub use rename_files::run_rename_files;
pub use run::run_full;
