use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use crate::error::StateResult;
use crate::traits::{RangeScan, WorldState};

/// In-memory, BTreeMap-based world state.
///
/// Intended for tests, demos, and embedding. Entries are held in key order
/// behind an `RwLock` so the backend is safe to share; the dispatch layer
/// itself never relies on that lock for isolation. Values are cloned on
/// read and on scan.
pub struct MemoryWorldState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryWorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Return all keys in lexicographic order.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        map.keys().cloned().collect()
    }
}

impl Default for MemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for MemoryWorldState {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StateResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value);
        Ok(())
    }

    fn range(&self, start: &str, end: &str) -> StateResult<Box<dyn RangeScan + '_>> {
        // BTreeMap::range panics on an inverted range; an empty scan is the
        // contract here.
        if !start.is_empty() && !end.is_empty() && start > end {
            return Ok(Box::new(SnapshotScan::empty()));
        }

        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_string())
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_string())
        };

        // Materialize the bounded slice under the read lock so the scan
        // observes a single point-in-time view regardless of later writes.
        let map = self.entries.read().expect("lock poisoned");
        let entries: Vec<(String, Vec<u8>)> = map
            .range((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Box::new(SnapshotScan::new(entries)))
    }
}

impl std::fmt::Debug for MemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryWorldState")
            .field("key_count", &self.len())
            .finish()
    }
}

/// Cursor over a point-in-time snapshot of a bounded key range.
struct SnapshotScan {
    entries: std::vec::IntoIter<(String, Vec<u8>)>,
}

impl SnapshotScan {
    fn new(entries: Vec<(String, Vec<u8>)>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }

    fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl RangeScan for SnapshotScan {
    fn next_entry(&mut self) -> StateResult<Option<(String, Vec<u8>)>> {
        Ok(self.entries.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryWorldState {
        let state = MemoryWorldState::new();
        for key in ["a", "b", "c", "d"] {
            state.put(key, key.as_bytes().to_vec()).unwrap();
        }
        state
    }

    fn drain(mut scan: Box<dyn RangeScan + '_>) -> Vec<String> {
        let mut keys = Vec::new();
        while let Some((key, _)) = scan.next_entry().unwrap() {
            keys.push(key);
        }
        keys
    }

    // -----------------------------------------------------------------------
    // Point operations
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let state = MemoryWorldState::new();
        state.put("k", b"value".to_vec()).unwrap();
        assert_eq!(state.get("k").unwrap().unwrap(), b"value");
    }

    #[test]
    fn get_missing_returns_none() {
        let state = MemoryWorldState::new();
        assert!(state.get("absent").unwrap().is_none());
    }

    #[test]
    fn put_overwrites() {
        let state = MemoryWorldState::new();
        state.put("k", b"old".to_vec()).unwrap();
        state.put("k", b"new".to_vec()).unwrap();
        assert_eq!(state.get("k").unwrap().unwrap(), b"new");
        assert_eq!(state.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Range bounds
    // -----------------------------------------------------------------------

    #[test]
    fn range_is_start_inclusive_end_exclusive() {
        let state = seeded();
        let keys = drain(state.range("b", "d").unwrap());
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn range_open_on_both_sides_scans_everything() {
        let state = seeded();
        let keys = drain(state.range("", "").unwrap());
        assert_eq!(keys, ["a", "b", "c", "d"]);
    }

    #[test]
    fn range_open_start() {
        let state = seeded();
        let keys = drain(state.range("", "c").unwrap());
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn range_open_end() {
        let state = seeded();
        let keys = drain(state.range("c", "").unwrap());
        assert_eq!(keys, ["c", "d"]);
    }

    #[test]
    fn range_outside_stored_keys_is_empty() {
        let state = seeded();
        assert!(drain(state.range("x", "z").unwrap()).is_empty());
    }

    #[test]
    fn range_with_equal_bounds_is_empty() {
        let state = seeded();
        assert!(drain(state.range("b", "b").unwrap()).is_empty());
    }

    #[test]
    fn inverted_range_is_empty_not_a_panic() {
        let state = seeded();
        assert!(drain(state.range("z", "a").unwrap()).is_empty());
    }

    #[test]
    fn range_on_empty_state_is_empty() {
        let state = MemoryWorldState::new();
        assert!(drain(state.range("", "").unwrap()).is_empty());
    }

    // -----------------------------------------------------------------------
    // Ordering and snapshot consistency
    // -----------------------------------------------------------------------

    #[test]
    fn range_yields_keys_in_lexicographic_order() {
        let state = MemoryWorldState::new();
        for key in ["10", "2", "1", "11"] {
            state.put(key, Vec::new()).unwrap();
        }
        let keys = drain(state.range("", "").unwrap());
        assert_eq!(keys, ["1", "10", "11", "2"]);
    }

    #[test]
    fn scan_observes_a_point_in_time_view() {
        let state = seeded();
        let mut scan = state.range("", "").unwrap();
        // A write landing after acquisition must not appear in this scan.
        state.put("e", b"late".to_vec()).unwrap();

        let mut keys = Vec::new();
        while let Some((key, _)) = scan.next_entry().unwrap() {
            keys.push(key);
        }
        assert_eq!(keys, ["a", "b", "c", "d"]);
    }

    #[test]
    fn scan_values_match_stored_bytes() {
        let state = seeded();
        let mut scan = state.range("a", "b").unwrap();
        let (key, value) = scan.next_entry().unwrap().unwrap();
        assert_eq!(key, "a");
        assert_eq!(value, b"a");
        assert!(scan.next_entry().unwrap().is_none());
    }

    #[test]
    fn exhausted_scan_keeps_returning_none() {
        let state = MemoryWorldState::new();
        state.put("only", Vec::new()).unwrap();
        let mut scan = state.range("", "").unwrap();
        assert!(scan.next_entry().unwrap().is_some());
        assert!(scan.next_entry().unwrap().is_none());
        assert!(scan.next_entry().unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_is_empty_clear() {
        let state = MemoryWorldState::new();
        assert!(state.is_empty());
        state.put("k", Vec::new()).unwrap();
        assert_eq!(state.len(), 1);
        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn keys_are_sorted() {
        let state = MemoryWorldState::new();
        for key in ["c", "a", "b"] {
            state.put(key, Vec::new()).unwrap();
        }
        assert_eq!(state.keys(), ["a", "b", "c"]);
    }

    #[test]
    fn default_creates_empty_state() {
        assert!(MemoryWorldState::default().is_empty());
    }

    #[test]
    fn debug_format() {
        let state = MemoryWorldState::new();
        state.put("k", Vec::new()).unwrap();
        let debug = format!("{state:?}");
        assert!(debug.contains("MemoryWorldState"));
        assert!(debug.contains("key_count"));
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    assert_eq!(state.get("a").unwrap().unwrap(), b"a");
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread should not panic");
        }
    }
}
