//! Pricing contract: per-deal price agreements.

use serde::{Deserialize, Serialize};

use shoal_codec::JsonCodec;
use shoal_dispatch::{Dispatcher, QueryAllHandler, QueryHandler, RecordHandler};
use shoal_store::{ContractError, Record};

/// A price agreed between trading parties, keyed by deal id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agreement {
    /// Agreed price.
    pub price: f64,
}

impl Record for Agreement {
    const KIND: &'static str = "agreement";
    const FIELDS: &'static [&'static str] = &["price"];

    fn from_args(args: &[String]) -> Result<Self, ContractError> {
        let price = args[0]
            .parse::<f64>()
            .map_err(|err| ContractError::invalid_argument("price", err.to_string()))?;
        Ok(Self { price })
    }
}

/// Assemble the pricing contract.
///
/// Call surface: `recordAgreement(id, price)`, `queryAgreement(id)`,
/// `queryAllAgreement([startId[, endId]])`.
pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(vec![
        Box::new(RecordHandler::new(
            "recordAgreement",
            JsonCodec::<Agreement>::new(),
        )),
        Box::new(QueryHandler::new(
            "queryAgreement",
            JsonCodec::<Agreement>::new(),
        )),
        Box::new(QueryAllHandler::new(
            "queryAllAgreement",
            JsonCodec::<Agreement>::new(),
        )),
    ])
}
