//! A single file admitted into ranking

use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One filesystem object considered for ranking.
///
/// Entries are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    size: u64,
    modified: SystemTime,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: SystemTime) -> Self {
        let path = path.into();
        let name = base_name(&path);
        Self {
            path,
            name,
            size,
            modified,
        }
    }

    /// Build an entry from metadata already read for `path`.
    ///
    /// Fails only when the platform cannot report a modification time.
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> io::Result<Self> {
        Ok(Self::new(path, metadata.len(), metadata.modified()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Last path component as a string, empty when the path has none (e.g. `/`).
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
