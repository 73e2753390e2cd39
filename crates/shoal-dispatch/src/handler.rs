use shoal_codec::RecordCodec;
use shoal_state::WorldState;
use shoal_store::{seed_entities, AssetStore, ContractError, HolderRecord, Record, SeedConfig};

/// One registered transaction function.
///
/// Handlers own arity and argument interpretation; the dispatcher only
/// resolves names and converts outcomes. A handler returns raw payload
/// bytes on success (possibly empty) and a [`ContractError`] on failure —
/// never a response envelope of its own, so the call boundary has exactly
/// one place that constructs envelopes.
///
/// The trait is object-safe and `Send + Sync` so a registry can hold
/// `Box<dyn TransactionHandler>` values.
pub trait TransactionHandler: Send + Sync {
    /// Wire name this handler is registered under.
    fn name(&self) -> &str;

    /// Execute the call against the given world state.
    fn invoke(&self, state: &dyn WorldState, args: &[String]) -> Result<Vec<u8>, ContractError>;
}

// ---------------------------------------------------------------------------
// RecordHandler
// ---------------------------------------------------------------------------

/// Create an entity: `name(id, field1, ...)` with one argument per record
/// field after the key. Succeeds with an empty payload.
pub struct RecordHandler<C> {
    name: &'static str,
    codec: C,
}

impl<C> RecordHandler<C> {
    pub fn new(name: &'static str, codec: C) -> Self {
        Self { name, codec }
    }
}

impl<C> TransactionHandler for RecordHandler<C>
where
    C: RecordCodec,
    C::Record: Record,
{
    fn name(&self) -> &str {
        self.name
    }

    fn invoke(&self, state: &dyn WorldState, args: &[String]) -> Result<Vec<u8>, ContractError> {
        let expected = 1 + C::Record::FIELDS.len();
        if args.len() != expected {
            return Err(ContractError::arity(expected.to_string(), args.len()));
        }

        let store = AssetStore::new(state, &self.codec);
        store.create(&args[0], &args[1..])?;
        Ok(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// ChangeHolderHandler
// ---------------------------------------------------------------------------

/// Replace an entity's holder: `name(id, newHolder)`. Succeeds with an
/// empty payload; fails if the entity does not exist.
pub struct ChangeHolderHandler<C> {
    name: &'static str,
    codec: C,
}

impl<C> ChangeHolderHandler<C> {
    pub fn new(name: &'static str, codec: C) -> Self {
        Self { name, codec }
    }
}

impl<C> TransactionHandler for ChangeHolderHandler<C>
where
    C: RecordCodec,
    C::Record: HolderRecord,
{
    fn name(&self) -> &str {
        self.name
    }

    fn invoke(&self, state: &dyn WorldState, args: &[String]) -> Result<Vec<u8>, ContractError> {
        if args.len() != 2 {
            return Err(ContractError::arity("2", args.len()));
        }

        let store = AssetStore::new(state, &self.codec);
        store.mutate_holder(&args[0], &args[1])?;
        Ok(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// QueryHandler
// ---------------------------------------------------------------------------

/// Fetch one entity: `name(id)`. Succeeds with a single keyed JSON
/// document.
pub struct QueryHandler<C> {
    name: &'static str,
    codec: C,
}

impl<C> QueryHandler<C> {
    pub fn new(name: &'static str, codec: C) -> Self {
        Self { name, codec }
    }
}

impl<C> TransactionHandler for QueryHandler<C>
where
    C: RecordCodec,
    C::Record: Record,
{
    fn name(&self) -> &str {
        self.name
    }

    fn invoke(&self, state: &dyn WorldState, args: &[String]) -> Result<Vec<u8>, ContractError> {
        if args.len() != 1 {
            return Err(ContractError::arity("1", args.len()));
        }

        let store = AssetStore::new(state, &self.codec);
        store.fetch(&args[0])
    }
}

// ---------------------------------------------------------------------------
// QueryAllHandler
// ---------------------------------------------------------------------------

/// List entities in a key range: `name([startId[, endId]])`. Omitted
/// bounds are open. Succeeds with a JSON array ordered by key; an empty
/// range is an empty array.
pub struct QueryAllHandler<C> {
    name: &'static str,
    codec: C,
}

impl<C> QueryAllHandler<C> {
    pub fn new(name: &'static str, codec: C) -> Self {
        Self { name, codec }
    }
}

impl<C> TransactionHandler for QueryAllHandler<C>
where
    C: RecordCodec,
    C::Record: Record,
{
    fn name(&self) -> &str {
        self.name
    }

    fn invoke(&self, state: &dyn WorldState, args: &[String]) -> Result<Vec<u8>, ContractError> {
        if args.len() > 2 {
            return Err(ContractError::arity("at most 2", args.len()));
        }

        let start = args.first().map(String::as_str).unwrap_or("");
        let end = args.get(1).map(String::as_str).unwrap_or("");

        let store = AssetStore::new(state, &self.codec);
        store.list(start, end)
    }
}

// ---------------------------------------------------------------------------
// SeedHandler
// ---------------------------------------------------------------------------

/// Seed the ledger once at initialization: `name([count])`. The count
/// defaults from the configuration; rows are fixed configuration data so
/// replicas replay identical writes. Succeeds with an empty payload.
pub struct SeedHandler<C> {
    name: &'static str,
    codec: C,
    config: SeedConfig,
}

impl<C> SeedHandler<C> {
    pub fn new(name: &'static str, codec: C, config: SeedConfig) -> Self {
        Self {
            name,
            codec,
            config,
        }
    }
}

impl<C> TransactionHandler for SeedHandler<C>
where
    C: RecordCodec,
    C::Record: Record,
{
    fn name(&self) -> &str {
        self.name
    }

    fn invoke(&self, state: &dyn WorldState, args: &[String]) -> Result<Vec<u8>, ContractError> {
        if args.len() > 1 {
            return Err(ContractError::arity("at most 1", args.len()));
        }

        let count = match args.first() {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|err| ContractError::invalid_argument("count", err.to_string()))?,
            None => self.config.default_count,
        };

        let store = AssetStore::new(state, &self.codec);
        seed_entities(&store, &self.config, count)?;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use shoal_codec::JsonCodec;
    use shoal_state::MemoryWorldState;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Pallet {
        contents: String,
        holder: String,
    }

    impl Record for Pallet {
        const KIND: &'static str = "pallet";
        const FIELDS: &'static [&'static str] = &["contents", "holder"];

        fn from_args(args: &[String]) -> Result<Self, ContractError> {
            Ok(Self {
                contents: args[0].clone(),
                holder: args[1].clone(),
            })
        }
    }

    impl HolderRecord for Pallet {
        fn holder(&self) -> &str {
            &self.holder
        }

        fn set_holder(&mut self, holder: String) {
            self.holder = holder;
        }
    }

    const CODEC: JsonCodec<Pallet> = JsonCodec::new();

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn record_pallet(state: &MemoryWorldState, id: &str) {
        RecordHandler::new("recordPallet", CODEC)
            .invoke(state, &args(&[id, "herring", "alice"]))
            .unwrap();
    }

    // -----------------------------------------------------------------------
    // 1. Record handler
    // -----------------------------------------------------------------------

    #[test]
    fn record_succeeds_with_an_empty_payload() {
        let state = MemoryWorldState::new();
        let payload = RecordHandler::new("recordPallet", CODEC)
            .invoke(&state, &args(&["p1", "herring", "alice"]))
            .unwrap();
        assert!(payload.is_empty());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn record_rejects_wrong_arity_before_writing() {
        let state = MemoryWorldState::new();
        let err = RecordHandler::new("recordPallet", CODEC)
            .invoke(&state, &args(&["p1", "herring"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::Arity { .. }));
        assert!(state.is_empty());
    }

    // -----------------------------------------------------------------------
    // 2. Change-holder handler
    // -----------------------------------------------------------------------

    #[test]
    fn change_holder_updates_the_entity() {
        let state = MemoryWorldState::new();
        record_pallet(&state, "p1");

        ChangeHolderHandler::new("changePalletHolder", CODEC)
            .invoke(&state, &args(&["p1", "bob"]))
            .unwrap();

        let document = QueryHandler::new("queryPallet", CODEC)
            .invoke(&state, &args(&["p1"]))
            .unwrap();
        let document: serde_json::Value = serde_json::from_slice(&document).unwrap();
        assert_eq!(document["holder"], "bob");
        assert_eq!(document["contents"], "herring");
    }

    #[test]
    fn change_holder_requires_exactly_two_args() {
        let state = MemoryWorldState::new();
        let err = ChangeHolderHandler::new("changePalletHolder", CODEC)
            .invoke(&state, &args(&["p1"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::Arity { .. }));
    }

    #[test]
    fn change_holder_on_missing_entity_is_not_found() {
        let state = MemoryWorldState::new();
        let err = ChangeHolderHandler::new("changePalletHolder", CODEC)
            .invoke(&state, &args(&["ghost", "bob"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::NotFound(_)));
    }

    // -----------------------------------------------------------------------
    // 3. Query handlers
    // -----------------------------------------------------------------------

    #[test]
    fn query_returns_a_keyed_document() {
        let state = MemoryWorldState::new();
        record_pallet(&state, "p1");

        let document = QueryHandler::new("queryPallet", CODEC)
            .invoke(&state, &args(&["p1"]))
            .unwrap();
        let document: serde_json::Value = serde_json::from_slice(&document).unwrap();
        assert_eq!(
            document,
            serde_json::json!({"id": "p1", "contents": "herring", "holder": "alice"})
        );
    }

    #[test]
    fn query_all_accepts_zero_one_or_two_args() {
        let state = MemoryWorldState::new();
        for id in ["a", "b", "c"] {
            record_pallet(&state, id);
        }
        let handler = QueryAllHandler::new("queryAllPallet", CODEC);

        let ids = |payload: Vec<u8>| -> Vec<String> {
            let array: serde_json::Value = serde_json::from_slice(&payload).unwrap();
            array
                .as_array()
                .unwrap()
                .iter()
                .map(|doc| doc["id"].as_str().unwrap().to_string())
                .collect()
        };

        assert_eq!(ids(handler.invoke(&state, &[]).unwrap()), ["a", "b", "c"]);
        assert_eq!(ids(handler.invoke(&state, &args(&["b"])).unwrap()), ["b", "c"]);
        assert_eq!(
            ids(handler.invoke(&state, &args(&["a", "c"])).unwrap()),
            ["a", "b"]
        );
    }

    #[test]
    fn query_all_rejects_three_args() {
        let state = MemoryWorldState::new();
        let err = QueryAllHandler::new("queryAllPallet", CODEC)
            .invoke(&state, &args(&["a", "b", "c"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::Arity { .. }));
    }

    // -----------------------------------------------------------------------
    // 4. Seed handler
    // -----------------------------------------------------------------------

    fn seed_config() -> SeedConfig {
        SeedConfig::new(
            3,
            vec![
                args(&["herring", "fredrick"]),
                args(&["mackerel", "fredrick"]),
            ],
        )
    }

    #[test]
    fn seed_uses_the_default_count_without_args() {
        let state = MemoryWorldState::new();
        SeedHandler::new("initLedger", CODEC, seed_config())
            .invoke(&state, &[])
            .unwrap();
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn seed_accepts_an_explicit_count() {
        let state = MemoryWorldState::new();
        SeedHandler::new("initLedger", CODEC, seed_config())
            .invoke(&state, &args(&["5"]))
            .unwrap();
        assert_eq!(state.keys(), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn seed_rejects_an_unparsable_count() {
        let state = MemoryWorldState::new();
        let err = SeedHandler::new("initLedger", CODEC, seed_config())
            .invoke(&state, &args(&["twenty"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument { .. }));
        assert!(state.is_empty());
    }

    #[test]
    fn seed_rejects_extra_args() {
        let state = MemoryWorldState::new();
        let err = SeedHandler::new("initLedger", CODEC, seed_config())
            .invoke(&state, &args(&["2", "extra"]))
            .unwrap_err();
        assert!(matches!(err, ContractError::Arity { .. }));
    }
}
