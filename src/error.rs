//! Error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A filesystem failure met while walking. Never fatal on its own; the
/// reporter decides what the walker does next.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("cannot access '{}': {source}", path.display())]
    Root { path: PathBuf, source: io::Error },

    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("cannot read entry in '{}': {source}", path.display())]
    DirEntry { path: PathBuf, source: io::Error },

    #[error("cannot access '{}': {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },
}

impl WalkError {
    pub fn path(&self) -> &Path {
        match self {
            WalkError::Root { path, .. }
            | WalkError::ReadDir { path, .. }
            | WalkError::DirEntry { path, .. }
            | WalkError::Metadata { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            WalkError::Root { source, .. }
            | WalkError::ReadDir { source, .. }
            | WalkError::DirEntry { source, .. }
            | WalkError::Metadata { source, .. } => source,
        }
    }
}

/// Invalid user configuration, reported before any traversal starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid --{flag} duration '{value}': {reason}")]
    InvalidDuration {
        flag: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid --ignore pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
