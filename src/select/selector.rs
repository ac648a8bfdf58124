//! Bounded top-K selection with running totals

use serde::Serialize;

use crate::entry::Entry;

use super::policy::OrderingPolicy;

/// Aggregate over every entry inserted, retained or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    #[serde(rename = "files")]
    pub num_entries: u64,
    #[serde(rename = "bytes")]
    pub sum_size: u64,
}

/// Keeps the best `limit` entries seen so far, best first.
///
/// The ranked set stays sorted under the policy after every insert and never
/// grows past `limit`. Entries that tie keep their insertion order.
#[derive(Debug, Clone)]
pub struct TopKSelector {
    policy: OrderingPolicy,
    limit: usize,
    ranked: Vec<Entry>,
    totals: Totals,
}

impl TopKSelector {
    pub fn new(policy: OrderingPolicy, limit: usize) -> Self {
        Self {
            policy,
            limit,
            ranked: Vec::new(),
            totals: Totals::default(),
        }
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// Count the entry in the totals and keep it if it makes the cut.
    pub fn insert(&mut self, entry: Entry) {
        self.totals.num_entries += 1;
        self.totals.sum_size = self.totals.sum_size.saturating_add(entry.size());

        // First slot whose occupant the new entry strictly outranks
        let pos = self
            .ranked
            .partition_point(|held| !self.policy.ranks_before(&entry, held));

        if pos == self.ranked.len() && self.ranked.len() >= self.limit {
            tracing::trace!(path = %entry.path().display(), "below cut, discarded");
            return;
        }

        self.ranked.insert(pos, entry);
        self.ranked.truncate(self.limit);
    }

    /// Ranked entries, best first.
    pub fn results(&self) -> &[Entry] {
        &self.ranked
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }
}
