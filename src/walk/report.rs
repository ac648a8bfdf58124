//! Per-node walk decisions and error reporting

use std::io::{self, Write};

use crate::error::WalkError;

/// What the walker does after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAction {
    /// Keep going; descend if the node is a directory
    Continue,
    /// Do not descend into this node; carry on with its siblings
    SkipSubtree,
    /// Stop the whole walk
    Abort,
}

/// Receives filesystem errors met during the walk and chooses how to proceed.
pub trait ErrorReporter {
    fn report(&mut self, error: WalkError) -> WalkAction;
}

/// Writes each error as one `ftop: ...` line to stderr and skips the
/// offending subtree.
#[derive(Debug, Default)]
pub struct StderrReporter {
    errors: usize,
}

impl StderrReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of errors reported so far.
    pub fn errors(&self) -> usize {
        self.errors
    }
}

impl ErrorReporter for StderrReporter {
    fn report(&mut self, error: WalkError) -> WalkAction {
        self.errors += 1;
        tracing::debug!(path = %error.path().display(), kind = ?error.io_error().kind(), "skipping");
        // Nothing useful to do if stderr itself is gone
        let _ = writeln!(io::stderr().lock(), "ftop: {}", error);
        WalkAction::SkipSubtree
    }
}

/// Collects errors instead of printing them.
impl ErrorReporter for Vec<WalkError> {
    fn report(&mut self, error: WalkError) -> WalkAction {
        self.push(error);
        WalkAction::SkipSubtree
    }
}
