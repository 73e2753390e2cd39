use serde::{Deserialize, Serialize};

/// One incoming transaction call: a function name and its ordered string
/// arguments. Immutable for the duration of the invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEnvelope {
    /// Name of the function to invoke.
    pub function: String,
    /// Ordered call arguments, uninterpreted by the dispatcher.
    pub args: Vec<String>,
}

impl CallEnvelope {
    /// Create a call envelope.
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }

    /// Convenience constructor for string-literal call sites.
    pub fn from_parts(function: &str, args: &[&str]) -> Self {
        Self::new(function, args.iter().map(|arg| arg.to_string()).collect())
    }
}

/// The uniform call-boundary result: exactly one of a success payload or a
/// failure message, enforced by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseEnvelope {
    /// The call succeeded. The payload may be empty (mutating calls return
    /// no body) or carry serialized JSON (query calls).
    Success { payload: Vec<u8> },
    /// The call failed with a human-readable message.
    Failure { message: String },
}

impl ResponseEnvelope {
    /// A success envelope carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self::Success { payload }
    }

    /// A success envelope with an empty payload.
    pub fn empty() -> Self {
        Self::Success {
            payload: Vec::new(),
        }
    }

    /// A failure envelope carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Returns `true` for a success envelope.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The success payload, if this is a success envelope.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if this is a failure envelope.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}
