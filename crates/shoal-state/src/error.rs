/// Errors from world-state operations.
///
/// A missing key is not an error: reads surface it as `Ok(None)` so callers
/// can distinguish "absent" from a store-level fault.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The underlying storage backend reported a fault.
    #[error("state backend error: {0}")]
    Backend(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for world-state operations.
pub type StateResult<T> = Result<T, StateError>;
