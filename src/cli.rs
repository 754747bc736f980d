//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a DAT file at startup
//! - Scripted (non-interactive) command execution
//! - Skipping confirmation prompts

use clap::Parser;
use std::path::PathBuf;

/// An editor for pipe-delimited DAT files
#[derive(Parser, Debug)]
#[command(
    name = "datgrid",
    version,
    about = "An editor for pipe-delimited DAT files"
)]
pub struct CliArgs {
    /// DAT file to open at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Run a semicolon-separated command script and exit (e.g. "set 1 2 x; write")
    #[arg(short = 'c', long, value_name = "SCRIPT")]
    pub command: Option<String>,

    /// Answer yes to delete and discard confirmations
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// What the process does after startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Read commands from stdin until quit
    Interactive,
    /// Execute a script, then exit
    Script(String),
}

impl CliArgs {
    /// Determine the run mode from parsed arguments
    pub fn run_mode(&self) -> RunMode {
        match &self.command {
            Some(script) => RunMode::Script(script.clone()),
            None => RunMode::Interactive,
        }
    }
}
