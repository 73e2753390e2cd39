//! Record serialization for the shoal world state.
//!
//! Entities are stored as codec-encoded bytes under their world-state key.
//! This crate defines the [`RecordCodec`] seam that parameterizes the entity
//! store per entity kind, plus the JSON implementation used by the shipped
//! contracts. Encoding is deterministic (struct fields in declaration
//! order) and decoding is tolerant of JSON object key order, so two encoded
//! forms of the same record always decode to equal values.
//!
//! # Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shoal_codec::{JsonCodec, RecordCodec};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Agreement {
//!     price: f64,
//! }
//!
//! let codec = JsonCodec::<Agreement>::new();
//! let bytes = codec.encode(&Agreement { price: 9.5 }).unwrap();
//! let decoded = codec.decode(&bytes).unwrap();
//! assert_eq!(decoded, Agreement { price: 9.5 });
//! ```

pub mod error;
pub mod json;
pub mod traits;

pub use error::CodecError;
pub use json::JsonCodec;
pub use traits::RecordCodec;
