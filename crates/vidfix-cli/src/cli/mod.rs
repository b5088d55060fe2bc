//! CLI for the vidfix video-name fixer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_fix_doc, run_full, run_rename_files};

/// Top-level CLI for vidfix.
#[derive(Debug, Parser)]
#[command(name = "vidfix")]
#[command(about = "vidfix: reconcile <video> references with the video files on disk", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Canonicalize every <video> src value in a document.
    FixDoc {
        /// Path to the HTML document.
        doc: PathBuf,

        /// Write the result here instead of back to the input file.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Rename video files on disk to their canonical names.
    RenameFiles {
        /// Directories to scan recursively.
        #[arg(required = true)]
        dirs: Vec<PathBuf>,

        /// File extension to match, without the dot.
        #[arg(long, default_value = "mp4")]
        ext: String,
    },

    /// Fix the document, then rename the files, in one pass.
    Run {
        /// Path to the HTML document.
        doc: PathBuf,

        /// Directories to scan recursively.
        #[arg(required = true)]
        dirs: Vec<PathBuf>,

        /// Write the document here instead of back to the input file.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// File extension to match, without the dot.
        #[arg(long, default_value = "mp4")]
        ext: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::FixDoc { doc, output } => run_fix_doc(&doc, output.as_deref())?,
            CliCommand::RenameFiles { dirs, ext } => run_rename_files(&dirs, &ext),
            CliCommand::Run {
                doc,
                dirs,
                output,
                ext,
            } => run_full(&doc, output.as_deref(), &dirs, &ext)?,
        }

        Ok(())
    }
}
