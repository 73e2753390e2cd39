//! Supply-chain provenance contract: traceable catches changing hands.

use serde::{Deserialize, Serialize};

use shoal_codec::JsonCodec;
use shoal_dispatch::{
    ChangeHolderHandler, Dispatcher, QueryAllHandler, QueryHandler, RecordHandler, SeedHandler,
};
use shoal_store::{ContractError, HolderRecord, Record, SeedConfig};

/// A landed catch tracked from vessel to final holder.
///
/// The key under which a catch is stored is its external identity; the
/// serialized value carries only these fields. `holder` is the one
/// attribute that changes as the catch moves through the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catch {
    /// Vessel that landed the catch.
    pub vessel: String,
    /// Landing timestamp, kept as an opaque caller-supplied string.
    pub datetime: String,
    /// Landing location.
    pub location: String,
    /// Current holder.
    pub holder: String,
}

impl Record for Catch {
    const KIND: &'static str = "catch";
    const FIELDS: &'static [&'static str] = &["vessel", "datetime", "location", "holder"];

    fn from_args(args: &[String]) -> Result<Self, ContractError> {
        Ok(Self {
            vessel: args[0].clone(),
            datetime: args[1].clone(),
            location: args[2].clone(),
            holder: args[3].clone(),
        })
    }
}

impl HolderRecord for Catch {
    fn holder(&self) -> &str {
        &self.holder
    }

    fn set_holder(&mut self, holder: String) {
        self.holder = holder;
    }
}

/// Fixed sample rows for `initLedger`: vessel, datetime, location, holder.
///
/// The table is a constant so every replica seeding from it writes an
/// identical world state.
pub fn sample_seed() -> SeedConfig {
    const ROWS: &[[&str; 4]] = &[
        ["Dawn Chaser", "2018-01-12", "Bergen", "fredrick"],
        ["Silver Fin", "2018-01-29", "Aalesund", "fredrick"],
        ["North Star", "2018-02-04", "Tromso", "fredrick"],
        ["Grey Gull", "2018-02-17", "Kirkenes", "fredrick"],
        ["Sea Ember", "2018-03-01", "Bodo", "fredrick"],
        ["Wave Runner", "2018-03-15", "Hammerfest", "fredrick"],
        ["Cold Current", "2018-03-28", "Trondheim", "fredrick"],
        ["High Tide", "2018-04-09", "Stavanger", "fredrick"],
        ["Last Light", "2018-04-21", "Svolvaer", "fredrick"],
        ["Deep Blue", "2018-04-30", "Honningsvag", "fredrick"],
    ];

    SeedConfig::new(
        20,
        ROWS.iter()
            .map(|row| row.iter().map(|field| field.to_string()).collect())
            .collect(),
    )
}

/// Assemble the provenance contract.
///
/// Call surface: `recordCatch(id, vessel, datetime, location, holder)`,
/// `changeCatchHolder(id, newHolder)`, `queryCatch(id)`,
/// `queryAllCatch([startId[, endId]])`, `initLedger([count])`.
pub fn dispatcher(seed: SeedConfig) -> Dispatcher {
    Dispatcher::new(vec![
        Box::new(RecordHandler::new("recordCatch", JsonCodec::<Catch>::new())),
        Box::new(ChangeHolderHandler::new(
            "changeCatchHolder",
            JsonCodec::<Catch>::new(),
        )),
        Box::new(QueryHandler::new("queryCatch", JsonCodec::<Catch>::new())),
        Box::new(QueryAllHandler::new(
            "queryAllCatch",
            JsonCodec::<Catch>::new(),
        )),
        Box::new(SeedHandler::new(
            "initLedger",
            JsonCodec::<Catch>::new(),
            seed,
        )),
    ])
}
