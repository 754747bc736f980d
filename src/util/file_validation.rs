//! Pre-open checks for DAT files
//!
//! Rejects paths the editor cannot usefully load before any bytes are
//! parsed: missing files, directories, oversized files, and binary
//! content.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Largest file the editor will open (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Bytes scanned from the start of a file when sniffing for binary content
const BINARY_SNIFF_LEN: usize = 8192;

/// Reasons a path is rejected before parsing starts
#[derive(Debug, Clone)]
pub enum FileOpenError {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// A null byte appears near the start of the file
    BinaryFile,
    TooLarge { size_mb: f64 },
    IoError(String),
}

impl FileOpenError {
    /// Message shown to the user, naming the offending file
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::TooLarge { size_mb } => format!(
                "{} is too large ({:.1} MB, limit {} MB)",
                filename,
                size_mb,
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Self::IoError(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary content"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

/// Check a path before reading it into the editor
///
/// Catches the cases a raw `fs::read` reports poorly or not at all:
/// missing file, directory, a file over [`MAX_FILE_SIZE`], and binary
/// content (DAT files are always text).
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpenError::NotFound,
        std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
        _ => FileOpenError::IoError(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }
    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }
    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }

    Ok(())
}

/// Sniff the leading bytes of a file for null bytes
///
/// Null bytes are reliable binary markers and never legitimate in a DAT
/// file. Read errors count as "not binary" so the subsequent full read
/// can fail with its own more specific error.
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut head = [0u8; BINARY_SNIFF_LEN];
    match file.read(&mut head) {
        Ok(n) => head[..n].contains(&0),
        Err(_) => false,
    }
}

/// File name component of a path, for messages that name the file
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
