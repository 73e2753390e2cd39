//! Entity storage layer for shoal.
//!
//! Everything between the transaction dispatcher and the raw world state
//! lives here. An entity kind is described once — a record type with a
//! field shape plus a codec — and [`AssetStore`] supplies the four
//! operations every kind shares: create, mutate the holder attribute,
//! fetch one entity as a keyed document, and list a key range as a JSON
//! array. Adding a new entity kind means supplying a codec, not
//! duplicating store, range, or streaming code.
//!
//! Range queries are assembled by [`ArrayStreamer`] directly into one
//! output buffer, and [`seed_entities`] populates an empty ledger from
//! explicit, deterministic [`SeedConfig`] rows.

pub mod error;
pub mod record;
pub mod seed;
pub mod store;
pub mod stream;

pub use error::ContractError;
pub use record::{encode_document, HolderRecord, Record};
pub use seed::{seed_entities, SeedConfig};
pub use store::AssetStore;
pub use stream::ArrayStreamer;
