//! datgrid - editor backend for pipe-delimited DAT files
//!
//! This crate provides the core types and logic for loading, editing,
//! searching, and saving DAT flat files while reproducing each file's
//! quoting dialect on save.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod dat;
pub mod recent_files;
pub mod service;
pub mod shell;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use dat::{CellPosition, ParseError, Table, TableStore};
pub use service::TableService;
pub use shell::Shell;
