use crate::error::StateResult;

/// Ordered key-value world state.
///
/// All implementations must satisfy these invariants:
/// - Keys are opaque strings; the store never interprets values.
/// - A key maps to exactly one live value until overwritten; there is no
///   deletion path.
/// - `get` distinguishes "absent" (`Ok(None)`) from a backend fault (`Err`).
/// - `put` overwrites unconditionally. Transaction isolation is the hosting
///   runtime's responsibility, so no optimistic concurrency check is made.
/// - Range scans are ordered by key and read-consistent for the duration of
///   one scan: the scan observes a single point-in-time view.
pub trait WorldState: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: Vec<u8>) -> StateResult<()>;

    /// Open an ordered scan over keys in `[start, end)`.
    ///
    /// `start` is inclusive and `end` is exclusive; an empty bound means the
    /// scan is open on that side. The cursor borrows the store, so it cannot
    /// outlive the invocation that opened it, and it is released when
    /// dropped on every exit path. Bounds with `start > end` yield an empty
    /// scan.
    fn range(&self, start: &str, end: &str) -> StateResult<Box<dyn RangeScan + '_>>;
}

/// Pull-based cursor over an ordered key range.
///
/// The consumer drives progress; each pull either yields the next entry in
/// key order, signals exhaustion with `Ok(None)`, or surfaces a mid-scan
/// backend fault as `Err`.
pub trait RangeScan {
    /// Advance the cursor and return the next `(key, value)` pair.
    fn next_entry(&mut self) -> StateResult<Option<(String, Vec<u8>)>>;
}
