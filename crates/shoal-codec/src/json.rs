use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;
use crate::traits::RecordCodec;

/// JSON codec for any serde-derivable record type.
///
/// This is the wire format of the shipped contracts: entity structs are
/// stored as compact JSON objects, which keeps stored values readable from
/// ledger tooling and lets the query surface reuse the stored field names.
pub struct JsonCodec<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    /// Create a codec for record type `T`.
    pub const fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JsonCodec")
    }
}

impl<T> RecordCodec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    type Record = T;

    fn encode(&self, record: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(record).map_err(|err| CodecError::Encode(err.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|err| CodecError::Decode(err.to_string()))
    }
}
