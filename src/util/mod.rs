//! Utility modules

pub mod file_validation;

// Re-export file validation utilities
pub use file_validation::{
    filename_for_display, is_likely_binary, validate_file_for_opening, FileOpenError, MAX_FILE_SIZE,
};
