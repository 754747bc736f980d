//! Interactive shell for editing DAT files
//!
//! Line-oriented commands over the shared table service:
//! - `open`, `show`, `info` for loading and inspecting
//! - `set`, `insert`, `delete` for mutation
//! - `find` for search
//! - `write`, `export` for saving
//!
//! The same commands run interactively or as a `--command` script.

mod command;
pub mod grid;
mod repl;

pub use command::ShellCommand;
pub use repl::{Flow, Shell};
