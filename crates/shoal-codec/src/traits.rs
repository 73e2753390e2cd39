use crate::error::CodecError;

/// Serialization seam between typed entities and world-state bytes.
///
/// One codec instance covers one entity kind. Implementations must
/// round-trip every valid record value-for-value: `decode(encode(r))`
/// yields a record equal to `r` in every field, though not necessarily the
/// same byte layout. Decoding malformed input must fail with
/// [`CodecError::Decode`], never panic or silently truncate.
pub trait RecordCodec: Send + Sync {
    /// The entity kind this codec serializes.
    type Record;

    /// Serialize a record to its world-state byte representation.
    fn encode(&self, record: &Self::Record) -> Result<Vec<u8>, CodecError>;

    /// Deserialize a record from world-state bytes.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Record, CodecError>;
}
