//! Ordering policies for ranking entries

use std::cmp::Ordering;
use std::fmt;

use crate::entry::Entry;

/// Attribute entries are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Largest first
    #[default]
    Size,
    /// Most recently modified first
    Date,
    /// Alphabetical by base name
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Size, SortKey::Date, SortKey::Name];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Size => "size",
            SortKey::Date => "date",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort key plus an optional inversion.
///
/// `compare` returns `Less` when `a` ranks before `b`. Reversal inverts the
/// base comparison, so ties stay ties in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderingPolicy {
    key: SortKey,
    reverse: bool,
}

impl OrderingPolicy {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let base = match self.key {
            SortKey::Size => b.size().cmp(&a.size()),
            SortKey::Date => b.modified().cmp(&a.modified()),
            SortKey::Name => a.name().cmp(b.name()),
        };
        if self.reverse { base.reverse() } else { base }
    }

    /// True when `a` strictly outranks `b`.
    pub fn ranks_before(&self, a: &Entry, b: &Entry) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    fn entry(name: &str, size: u64, age_secs: u64) -> Entry {
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000 - age_secs);
        Entry::new(format!("/tmp/{}", name), size, modified)
    }

    #[test]
    fn test_sort_key_display() {
        let shown: Vec<String> = SortKey::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(shown, vec!["size", "date", "name"]);
        assert_eq!(SortKey::default(), SortKey::Size);
    }

    #[test]
    fn test_size_descending() {
        let policy = OrderingPolicy::new(SortKey::Size, false);
        let big = entry("big", 100, 0);
        let small = entry("small", 1, 0);
        assert!(policy.ranks_before(&big, &small));
        assert!(!policy.ranks_before(&small, &big));
    }

    #[test]
    fn test_date_descending() {
        let policy = OrderingPolicy::new(SortKey::Date, false);
        let fresh = entry("fresh", 1, 10);
        let stale = entry("stale", 1, 5000);
        assert!(policy.ranks_before(&fresh, &stale));
        assert!(!policy.ranks_before(&stale, &fresh));
    }

    #[test]
    fn test_name_ascending() {
        let policy = OrderingPolicy::new(SortKey::Name, false);
        let apple = entry("apple", 1, 0);
        let zebra = entry("zebra", 1, 0);
        assert!(policy.ranks_before(&apple, &zebra));
        assert!(!policy.ranks_before(&zebra, &apple));
    }

    #[test]
    fn test_name_is_bytewise() {
        let policy = OrderingPolicy::new(SortKey::Name, false);
        // Uppercase sorts before lowercase in byte order
        assert!(policy.ranks_before(&entry("Zed", 1, 0), &entry("apple", 1, 0)));
    }

    #[test]
    fn test_reverse_inverts_every_key() {
        let a = entry("a", 10, 10);
        let b = entry("b", 20, 20);
        for key in SortKey::ALL {
            let forward = OrderingPolicy::new(key, false);
            let reverse = OrderingPolicy::new(key, true);
            assert_eq!(forward.compare(&a, &b), reverse.compare(&b, &a), "{}", key);
            assert_ne!(forward.ranks_before(&a, &b), reverse.ranks_before(&a, &b), "{}", key);
        }
    }

    #[test]
    fn test_ties_never_rank_before() {
        let a = entry("same", 7, 3);
        let b = entry("same", 7, 3);
        for key in SortKey::ALL {
            for reverse in [false, true] {
                let policy = OrderingPolicy::new(key, reverse);
                assert!(!policy.ranks_before(&a, &b));
                assert!(!policy.ranks_before(&b, &a));
            }
        }
    }
}
