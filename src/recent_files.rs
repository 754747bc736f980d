//! Persistent recent files list
//!
//! Tracks DAT files opened in the editor, most recently used first, and
//! persists them as JSON under the config directory. Entries whose files
//! have disappeared are pruned at load time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Maximum number of entries to keep
const MAX_ENTRIES: usize = 50;

/// A single entry in the recent files list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEntry {
    /// Absolute path to the file
    pub path: PathBuf,
    /// Timestamp when last opened (Unix epoch seconds)
    pub opened_at: u64,
    /// Number of times the file has been opened
    #[serde(default)]
    pub open_count: u32,
}

impl RecentEntry {
    /// Create a new entry stamped with the current time
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            opened_at: now_epoch_secs(),
            open_count: 1,
        }
    }

    /// Record another opening of this file
    pub fn touch(&mut self) {
        self.opened_at = now_epoch_secs();
        self.open_count += 1;
    }

    /// Human-readable time since the file was last opened
    pub fn time_ago(&self) -> String {
        const UNITS: &[(u64, &str)] = &[
            (604_800, "week"),
            (86_400, "day"),
            (3_600, "hour"),
            (60, "min"),
        ];

        let diff = now_epoch_secs().saturating_sub(self.opened_at);
        for &(unit_secs, name) in UNITS {
            if diff >= unit_secs {
                let count = diff / unit_secs;
                let plural = if count == 1 { "" } else { "s" };
                return format!("{} {}{} ago", count, name, plural);
            }
        }
        "just now".to_string()
    }

    /// Check if the file still exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent recent files list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentFiles {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Recent file entries, most recent first
    pub entries: Vec<RecentEntry>,
}

impl RecentFiles {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load the list from disk; any failure yields an empty list
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::recent_files_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };

        let mut recent: Self = serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse recent files at {}: {}", path.display(), e);
            Self::default()
        });
        recent.prune_missing();
        recent
    }

    /// Write the list to disk, creating the config directory if needed
    pub fn save(&self) -> std::io::Result<()> {
        let path = crate::config_paths::recent_files_path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            )
        })?;
        crate::config_paths::ensure_all_config_dirs();

        let mut on_disk = self.clone();
        on_disk.version = Self::CURRENT_VERSION;
        std::fs::write(path, serde_json::to_string_pretty(&on_disk)?)
    }

    /// Record an opened file, moving it to the front of the list
    pub fn add(&mut self, path: PathBuf) {
        // Canonicalized so the same file opened via different paths dedupes
        let canonical = path.canonicalize().unwrap_or(path);

        let entry = match self.find_index(&canonical) {
            Some(idx) => {
                let mut entry = self.entries.remove(idx);
                entry.touch();
                entry
            }
            None => RecentEntry::new(canonical),
        };
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Drop entries whose files no longer exist
    pub fn prune_missing(&mut self) {
        let before = self.entries.len();
        self.entries.retain(|e| e.exists());
        if self.entries.len() != before {
            tracing::debug!(
                "Pruned {} missing files from recent list",
                before - self.entries.len()
            );
        }
    }

    fn find_index(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_retrieve() {
        let mut recent = RecentFiles::default();
        let path = PathBuf::from("/test/file.dat");

        recent.add(path.clone());

        assert_eq!(recent.entries.len(), 1);
        assert_eq!(recent.entries[0].path, path);
    }

    #[test]
    fn test_reopening_moves_to_front() {
        let mut recent = RecentFiles::default();

        recent.add(PathBuf::from("/first.dat"));
        recent.add(PathBuf::from("/second.dat"));
        recent.add(PathBuf::from("/first.dat")); // Reopen first

        assert_eq!(recent.entries[0].path, PathBuf::from("/first.dat"));
        assert_eq!(recent.entries.len(), 2); // No duplicate
    }

    #[test]
    fn test_open_count_increments() {
        let mut recent = RecentFiles::default();
        recent.add(PathBuf::from("/a.dat"));
        assert_eq!(recent.entries[0].open_count, 1);

        recent.add(PathBuf::from("/a.dat"));
        assert_eq!(recent.entries[0].open_count, 2);
    }

    #[test]
    fn test_capacity_limit_keeps_most_recent() {
        let mut recent = RecentFiles::default();

        for i in 0..100 {
            recent.add(PathBuf::from(format!("/file{}.dat", i)));
        }

        assert_eq!(recent.entries.len(), MAX_ENTRIES);
        assert_eq!(recent.entries[0].path, PathBuf::from("/file99.dat"));
        assert_eq!(
            recent.entries[MAX_ENTRIES - 1].path,
            PathBuf::from("/file50.dat")
        );
    }

    #[test]
    fn test_time_ago_just_now() {
        let entry = RecentEntry::new(PathBuf::from("/test.dat"));
        assert_eq!(entry.time_ago(), "just now");
    }

    #[test]
    fn test_time_ago_ranges() {
        let now = now_epoch_secs();
        let at = |secs_ago: u64| RecentEntry {
            path: PathBuf::from("/t.dat"),
            opened_at: now - secs_ago,
            open_count: 1,
        };

        assert_eq!(at(60).time_ago(), "1 min ago");
        assert_eq!(at(120).time_ago(), "2 mins ago");
        assert_eq!(at(3_600).time_ago(), "1 hour ago");
        assert_eq!(at(7_200).time_ago(), "2 hours ago");
        assert_eq!(at(172_800).time_ago(), "2 days ago");
        assert_eq!(at(1_209_600).time_ago(), "2 weeks ago");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut recent = RecentFiles {
            version: RecentFiles::CURRENT_VERSION,
            ..Default::default()
        };
        recent.add(PathBuf::from("/a.dat"));
        recent.add(PathBuf::from("/b.dat"));

        let json = serde_json::to_string(&recent).unwrap();
        let loaded: RecentFiles = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.entries[0].path, PathBuf::from("/b.dat"));
        assert_eq!(loaded.entries[1].path, PathBuf::from("/a.dat"));
        assert_eq!(loaded.version, 1);
    }

    #[test]
    fn test_find_index() {
        let mut recent = RecentFiles::default();
        recent.add(PathBuf::from("/a.dat"));
        recent.add(PathBuf::from("/b.dat"));

        assert_eq!(recent.find_index(&PathBuf::from("/a.dat")), Some(1));
        assert_eq!(recent.find_index(&PathBuf::from("/b.dat")), Some(0));
        assert_eq!(recent.find_index(&PathBuf::from("/c.dat")), None);
    }

    #[test]
    fn test_default_has_empty_entries() {
        let recent = RecentFiles::default();
        assert!(recent.entries.is_empty());
        assert_eq!(recent.version, 0);
    }
}
