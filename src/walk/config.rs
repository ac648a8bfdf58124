//! Configuration types for the walker

use std::time::{Duration, SystemTime};

use crate::error::ConfigError;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Skip dotfiles and never descend into dot-directories
    pub ignore_hidden: bool,
    /// Base-name patterns (exact or glob) pruned like hidden entries
    pub ignore_patterns: Vec<String>,
    /// Directories at this depth or deeper are not read (root = 0)
    pub max_depth: Option<usize>,
    /// Only accept files modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only accept files modified before this time
    pub older_than: Option<SystemTime>,
}

impl WalkerConfig {
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
/// Uses the humantime crate, so "30s", "5m", "3months" and "1y" all work.
pub fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Turn a `--newer`/`--older` argument into the point in time it names,
/// counting back from `now`.
pub fn parse_time_bound(
    flag: &'static str,
    value: &str,
    now: SystemTime,
) -> Result<SystemTime, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidDuration {
        flag,
        value: value.to_string(),
        reason,
    };
    let duration = parse_duration_string(value).map_err(&invalid)?;
    now.checked_sub(duration)
        .ok_or_else(|| invalid("duration out of range".to_string()))
}
