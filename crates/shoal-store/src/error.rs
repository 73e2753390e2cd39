use shoal_codec::CodecError;
use shoal_state::StateError;

/// Errors from contract-level operations.
///
/// Every variant is recoverable at the call boundary: the dispatcher
/// renders it into a failed response envelope and the process carries on.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Wrong number of call arguments.
    #[error("incorrect number of arguments: expected {expected}, got {actual}")]
    Arity { expected: String, actual: usize },

    /// An argument was present but could not be interpreted.
    #[error("invalid argument {name:?}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// No entity is stored under the given key.
    #[error("no state found for key {0:?}")]
    NotFound(String),

    /// Record serialization failure.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Fault from the underlying world-state backend.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// The seeding configuration cannot produce entities.
    #[error("seed configuration error: {0}")]
    Seed(String),
}

impl ContractError {
    /// Wrong-argument-count error; `expected` is a human-readable count
    /// such as `"5"` or `"at most 2"`.
    pub fn arity(expected: impl Into<String>, actual: usize) -> Self {
        Self::Arity {
            expected: expected.into(),
            actual,
        }
    }

    /// Uninterpretable-argument error for the named argument.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
