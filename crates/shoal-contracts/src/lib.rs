//! Contract assemblies for shoal.
//!
//! Two entity kinds ship here, each wired into a
//! [`Dispatcher`](shoal_dispatch::Dispatcher) by pairing the reusable
//! handlers with a JSON codec:
//!
//! - [`Catch`] — a traceable physical asset (vessel, datetime, location)
//!   whose `holder` changes as it moves through the supply chain.
//! - [`Agreement`] — a single-field price agreement between trading
//!   parties.
//!
//! Neither contract carries any dispatch, range, or streaming logic of its
//! own; a contract is a record type plus wire names.
//!
//! # Quick Start
//!
//! ```rust
//! use shoal_contracts::provenance;
//! use shoal_dispatch::CallEnvelope;
//! use shoal_state::MemoryWorldState;
//!
//! let dispatcher = provenance::dispatcher(provenance::sample_seed());
//! let state = MemoryWorldState::new();
//!
//! let record = CallEnvelope::from_parts(
//!     "recordCatch",
//!     &["1", "boat", "2018-01-01", "harbor", "alice"],
//! );
//! assert!(dispatcher.dispatch(&state, &record).is_success());
//!
//! let query = CallEnvelope::from_parts("queryCatch", &["1"]);
//! let response = dispatcher.dispatch(&state, &query);
//! assert!(response.is_success());
//! ```

pub mod pricing;
pub mod provenance;

pub use pricing::Agreement;
pub use provenance::Catch;
