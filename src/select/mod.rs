//! Top-K selection
//!
//! - `policy` - sort keys and the (optionally reversed) ordering over entries
//! - `selector` - the bounded ranked set plus global totals

mod policy;
mod selector;

pub use policy::{OrderingPolicy, SortKey};
pub use selector::{TopKSelector, Totals};

use crate::entry::Entry;

/// Receiver for entries accepted by the walker.
pub trait EntrySink {
    fn accept(&mut self, entry: Entry);
}

impl EntrySink for TopKSelector {
    fn accept(&mut self, entry: Entry) {
        self.insert(entry);
    }
}

impl EntrySink for Vec<Entry> {
    fn accept(&mut self, entry: Entry) {
        self.push(entry);
    }
}
