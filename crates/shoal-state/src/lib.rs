//! World-state access layer for shoal.
//!
//! The world state is an ordered mapping from opaque string keys to
//! serialized entity bytes. This crate defines the contract every backend
//! must satisfy and ships an in-memory backend for tests, demos, and
//! embedding. The hosting transaction runtime guarantees that one
//! invocation observes a consistent, isolated view, so the contract itself
//! is deliberately lock-free and synchronous: point get, point put, and a
//! pull-based range cursor that is consumed and released within one call.
//!
//! # Quick Start
//!
//! ```rust
//! use shoal_state::{MemoryWorldState, WorldState};
//!
//! let state = MemoryWorldState::new();
//! state.put("asset-1", b"{\"price\":9.5}".to_vec()).unwrap();
//! let value = state.get("asset-1").unwrap().expect("should exist");
//! assert_eq!(value, b"{\"price\":9.5}");
//! ```

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StateError, StateResult};
pub use memory::MemoryWorldState;
pub use traits::{RangeScan, WorldState};
