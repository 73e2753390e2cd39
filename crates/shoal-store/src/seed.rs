use serde::{Deserialize, Serialize};
use tracing::info;

use shoal_codec::RecordCodec;

use crate::error::ContractError;
use crate::record::Record;
use crate::store::AssetStore;

/// Configuration for one-time ledger seeding.
///
/// Seed data is explicit input: replicated execution replays every write,
/// so field values come from this configuration rather than from a clock
/// or a random source. The same config and count always produce the same
/// world state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of entities created when the call supplies no count.
    pub default_count: usize,
    /// Creation-argument rows, cycled when `count` exceeds the table.
    pub rows: Vec<Vec<String>>,
}

impl SeedConfig {
    /// Create a config from an explicit row table.
    pub fn new(default_count: usize, rows: Vec<Vec<String>>) -> Self {
        Self {
            default_count,
            rows,
        }
    }

    /// Parse a config from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, ContractError> {
        toml::from_str(raw).map_err(|err| ContractError::Seed(err.to_string()))
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            default_count: 20,
            rows: Vec::new(),
        }
    }
}

/// Populate the ledger with `count` entities keyed `"1"..=count`.
///
/// Rows are taken from the config in order, cycling when the table is
/// shorter than `count`. Creation short-circuits on the first failure;
/// entities created before the failure remain written. Returns the number
/// of entities created.
pub fn seed_entities<C>(
    store: &AssetStore<'_, C>,
    config: &SeedConfig,
    count: usize,
) -> Result<usize, ContractError>
where
    C: RecordCodec,
    C::Record: Record,
{
    if count == 0 {
        return Ok(0);
    }
    if config.rows.is_empty() {
        return Err(ContractError::Seed("no seed rows configured".into()));
    }

    for index in 1..=count {
        let fields = &config.rows[(index - 1) % config.rows.len()];
        store.create(&index.to_string(), fields)?;
    }

    info!(kind = C::Record::KIND, count, "ledger seeded");
    Ok(count)
}
