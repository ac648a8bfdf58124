//! Name and time filters applied during the walk

use std::time::SystemTime;

use glob::Pattern;

use crate::error::ConfigError;

use super::config::WalkerConfig;

/// Decides which entries the walker admits.
///
/// Name checks apply to files and directories alike; an excluded directory
/// is pruned. The time window applies to files only.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    ignore_hidden: bool,
    patterns: Vec<(String, Pattern)>,
    newer_than: Option<SystemTime>,
    older_than: Option<SystemTime>,
}

impl EntryFilter {
    pub fn new(config: &WalkerConfig) -> Result<Self, ConfigError> {
        let patterns = config
            .ignore_patterns
            .iter()
            .map(|raw| {
                Pattern::new(raw)
                    .map(|p| (raw.clone(), p))
                    .map_err(|e| ConfigError::InvalidPattern {
                        pattern: raw.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            ignore_hidden: config.ignore_hidden,
            patterns,
            newer_than: config.newer_than,
            older_than: config.older_than,
        })
    }

    /// Check if an entry with this base name should be left out.
    pub fn excludes_name(&self, name: &str) -> bool {
        if self.ignore_hidden && is_hidden(name) {
            return true;
        }
        self.patterns
            .iter()
            .any(|(raw, pattern)| name == raw || pattern.matches(name))
    }

    /// Check if a file's modification time falls inside the configured window.
    pub fn in_time_window(&self, modified: SystemTime) -> bool {
        if let Some(newer) = self.newer_than {
            if modified < newer {
                return false;
            }
        }
        if let Some(older) = self.older_than {
            if modified > older {
                return false;
            }
        }
        true
    }
}

/// Dotfile convention. An empty name is not hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
