use tracing::debug;

use shoal_codec::RecordCodec;
use shoal_state::WorldState;

use crate::error::ContractError;
use crate::record::{encode_document, HolderRecord, Record};
use crate::stream::ArrayStreamer;

/// Per-kind entity operations over the world state.
///
/// One store instance covers one entity kind, described by the codec's
/// record type. The store is scoped to a single invocation: it borrows the
/// world state for the duration of the call and holds no state of its own.
/// All argument validation happens before any mutation, so a failed call
/// never leaves a partial write behind.
pub struct AssetStore<'a, C> {
    state: &'a dyn WorldState,
    codec: &'a C,
}

impl<'a, C> AssetStore<'a, C>
where
    C: RecordCodec,
    C::Record: Record,
{
    /// Bind a store to a world state and a codec for one invocation.
    pub fn new(state: &'a dyn WorldState, codec: &'a C) -> Self {
        Self { state, codec }
    }

    /// Create an entity from creation arguments, overwriting any existing
    /// entity under `key`.
    ///
    /// The argument count is validated against the record's field shape
    /// before anything is parsed or written. No prior-existence check is
    /// made: create is idempotent by overwrite.
    pub fn create(&self, key: &str, fields: &[String]) -> Result<(), ContractError> {
        let expected = C::Record::FIELDS.len();
        if fields.len() != expected {
            return Err(ContractError::arity(expected.to_string(), fields.len()));
        }

        let record = C::Record::from_args(fields)?;
        let bytes = self.codec.encode(&record)?;
        self.state.put(key, bytes)?;
        debug!(kind = C::Record::KIND, key, "entity recorded");
        Ok(())
    }

    /// Replace the holder attribute of an existing entity.
    ///
    /// Read-modify-write as one logical step: the current value is read
    /// (missing key fails with [`ContractError::NotFound`] and writes
    /// nothing), decoded, updated, re-encoded, and written back in full.
    pub fn mutate_holder(&self, key: &str, holder: &str) -> Result<(), ContractError>
    where
        C::Record: HolderRecord,
    {
        let bytes = self
            .state
            .get(key)?
            .ok_or_else(|| ContractError::NotFound(key.to_string()))?;

        let mut record = self.codec.decode(&bytes)?;
        record.set_holder(holder.to_string());

        let bytes = self.codec.encode(&record)?;
        self.state.put(key, bytes)?;
        debug!(kind = C::Record::KIND, key, holder, "holder changed");
        Ok(())
    }

    /// Fetch one entity as a keyed document: `{"id": <key>, <fields>}`.
    pub fn fetch(&self, key: &str) -> Result<Vec<u8>, ContractError> {
        let bytes = self
            .state
            .get(key)?
            .ok_or_else(|| ContractError::NotFound(key.to_string()))?;

        let record = self.codec.decode(&bytes)?;
        Ok(encode_document(key, &record)?)
    }

    /// List entities with keys in `[start, end)` as a JSON array of keyed
    /// documents, ordered by key. Empty bounds are open; an empty result
    /// is an empty array, not an error.
    ///
    /// The scan cursor lives inside this call and is released on every
    /// exit path. The first mid-scan fault aborts assembly and the partial
    /// buffer is discarded.
    pub fn list(&self, start: &str, end: &str) -> Result<Vec<u8>, ContractError> {
        let mut scan = self.state.range(start, end)?;
        let mut streamer = ArrayStreamer::new();

        while let Some((key, bytes)) = scan.next_entry()? {
            let record = self.codec.decode(&bytes)?;
            streamer.push(&encode_document(&key, &record)?);
        }

        debug!(
            kind = C::Record::KIND,
            results = streamer.count(),
            "range query streamed"
        );
        Ok(streamer.finish())
    }
}
