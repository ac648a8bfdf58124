//! Traverser - walks roots and feeds accepted files to a sink

use std::fs::{self, DirEntry, Metadata};
use std::path::Path;

use crate::entry::{Entry, base_name};
use crate::error::{ConfigError, WalkError};
use crate::select::EntrySink;

use super::config::WalkerConfig;
use super::filter::EntryFilter;
use super::report::{ErrorReporter, WalkAction};

/// Walks root paths depth-first and hands every admitted file to a sink.
///
/// Children are visited in byte-wise name order, so two walks over the same
/// tree produce entries in the same order. Symlinks below a root are never
/// followed; they are ranked as leaves with their own metadata.
pub struct Traverser {
    config: WalkerConfig,
    filter: EntryFilter,
}

impl Traverser {
    pub fn new(config: WalkerConfig) -> Result<Self, ConfigError> {
        let filter = EntryFilter::new(&config)?;
        Ok(Self { config, filter })
    }

    /// Walk each root in order. Stops early only if the reporter aborts.
    pub fn walk_all<P, S, R>(&self, roots: &[P], sink: &mut S, reporter: &mut R) -> WalkAction
    where
        P: AsRef<Path>,
        S: EntrySink,
        R: ErrorReporter,
    {
        for root in roots {
            if self.walk(root.as_ref(), sink, reporter) == WalkAction::Abort {
                return WalkAction::Abort;
            }
        }
        WalkAction::Continue
    }

    /// Walk a single root, which may be a file or a directory.
    ///
    /// Returns `Abort` if the reporter asked to stop, `Continue` otherwise.
    pub fn walk<S, R>(&self, root: &Path, sink: &mut S, reporter: &mut R) -> WalkAction
    where
        S: EntrySink,
        R: ErrorReporter,
    {
        let _span = tracing::debug_span!("walk", root = %root.display()).entered();

        // The root is named explicitly, so follow it if it is a symlink
        let metadata = match fs::metadata(root) {
            Ok(m) => m,
            Err(source) => {
                let error = WalkError::Root {
                    path: root.to_path_buf(),
                    source,
                };
                return settle(reporter.report(error));
            }
        };

        // Roots go through the same name filter as everything below them
        if self.admit(&base_name(root)) != WalkAction::Continue {
            tracing::debug!("root excluded by filter");
            return WalkAction::Continue;
        }

        if metadata.is_dir() {
            return self.walk_dir(root, 0, sink, reporter);
        }
        settle(self.emit(root, &metadata, sink, reporter))
    }

    /// Name-based decision for a root or any node below it.
    pub fn admit(&self, name: &str) -> WalkAction {
        if self.filter.excludes_name(name) {
            WalkAction::SkipSubtree
        } else {
            WalkAction::Continue
        }
    }

    fn walk_dir<S, R>(&self, dir: &Path, depth: usize, sink: &mut S, reporter: &mut R) -> WalkAction
    where
        S: EntrySink,
        R: ErrorReporter,
    {
        if self.config.at_max_depth(depth) {
            return WalkAction::Continue;
        }

        let entries = match self.read_entries(dir, reporter) {
            Ok(entries) => entries,
            Err(action) => return settle(action),
        };

        for entry in entries {
            if self.visit(&entry, depth + 1, sink, reporter) == WalkAction::Abort {
                return WalkAction::Abort;
            }
        }

        WalkAction::Continue
    }

    /// Read and sort a directory's entries. Unreadable entries are reported
    /// and dropped; an unreadable directory yields the reporter's decision.
    fn read_entries<R: ErrorReporter>(
        &self,
        dir: &Path,
        reporter: &mut R,
    ) -> Result<Vec<DirEntry>, WalkAction> {
        let read_dir = fs::read_dir(dir).map_err(|source| {
            reporter.report(WalkError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        })?;

        let mut entries: Vec<DirEntry> = Vec::new();
        for result in read_dir {
            match result {
                Ok(entry) => entries.push(entry),
                Err(source) => {
                    let error = WalkError::DirEntry {
                        path: dir.to_path_buf(),
                        source,
                    };
                    if reporter.report(error) == WalkAction::Abort {
                        return Err(WalkAction::Abort);
                    }
                }
            }
        }

        entries.sort_by_key(|e| e.file_name());
        Ok(entries)
    }

    fn visit<S, R>(&self, entry: &DirEntry, depth: usize, sink: &mut S, reporter: &mut R) -> WalkAction
    where
        S: EntrySink,
        R: ErrorReporter,
    {
        let path = entry.path();

        if self.admit(&entry.file_name().to_string_lossy()) == WalkAction::SkipSubtree {
            tracing::debug!(path = %path.display(), "excluded by filter");
            return WalkAction::SkipSubtree;
        }

        // DirEntry::metadata does not traverse symlinks
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(source) => return reporter.report(WalkError::Metadata { path, source }),
        };

        if metadata.is_dir() {
            self.walk_dir(&path, depth, sink, reporter)
        } else {
            self.emit(&path, &metadata, sink, reporter)
        }
    }

    /// Turn a leaf into an entry and pass it on, if its timestamp qualifies.
    fn emit<S, R>(&self, path: &Path, metadata: &Metadata, sink: &mut S, reporter: &mut R) -> WalkAction
    where
        S: EntrySink,
        R: ErrorReporter,
    {
        let entry = match Entry::from_metadata(path, metadata) {
            Ok(e) => e,
            Err(source) => {
                return reporter.report(WalkError::Metadata {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if !self.filter.in_time_window(entry.modified()) {
            tracing::trace!(path = %path.display(), "outside time window");
            return WalkAction::Continue;
        }

        sink.accept(entry);
        WalkAction::Continue
    }
}

/// Collapse a node-level action into what the caller of a walk cares about.
fn settle(action: WalkAction) -> WalkAction {
    match action {
        WalkAction::Abort => WalkAction::Abort,
        WalkAction::Continue | WalkAction::SkipSubtree => WalkAction::Continue,
    }
}
