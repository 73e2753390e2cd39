//! Transaction dispatch for shoal.
//!
//! An incoming call is a function name plus an ordered list of string
//! arguments; the outcome is always exactly one response envelope, either
//! a success payload or an error message. The [`Dispatcher`] owns a
//! name-to-handler registry fixed at construction and performs no
//! interpretation of argument contents — arity and type checks belong to
//! the handlers.
//!
//! The reusable handlers in [`handler`] cover the whole call surface an
//! entity kind needs (record, change holder, query, query-all, seed), so a
//! new contract is assembled by pairing them with a codec.
//!
//! # Quick Start
//!
//! ```rust
//! use shoal_dispatch::{CallEnvelope, Dispatcher, QueryAllHandler, RecordHandler};
//! use shoal_codec::JsonCodec;
//! use shoal_state::MemoryWorldState;
//! use shoal_store::{ContractError, Record};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Lot {
//!     grade: String,
//! }
//!
//! impl Record for Lot {
//!     const KIND: &'static str = "lot";
//!     const FIELDS: &'static [&'static str] = &["grade"];
//!
//!     fn from_args(args: &[String]) -> Result<Self, ContractError> {
//!         Ok(Self { grade: args[0].clone() })
//!     }
//! }
//!
//! let dispatcher = Dispatcher::new(vec![
//!     Box::new(RecordHandler::new("recordLot", JsonCodec::<Lot>::new())),
//!     Box::new(QueryAllHandler::new("queryAllLot", JsonCodec::<Lot>::new())),
//! ]);
//!
//! let state = MemoryWorldState::new();
//! let call = CallEnvelope::new("recordLot", vec!["7".into(), "prime".into()]);
//! assert!(dispatcher.dispatch(&state, &call).is_success());
//! ```

pub mod dispatcher;
pub mod envelope;
pub mod handler;

pub use dispatcher::Dispatcher;
pub use envelope::{CallEnvelope, ResponseEnvelope};
pub use handler::{
    ChangeHolderHandler, QueryAllHandler, QueryHandler, RecordHandler, SeedHandler,
    TransactionHandler,
};
