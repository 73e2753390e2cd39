/// Errors from record encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The record could not be serialized.
    #[error("encode failed: {0}")]
    Encode(String),

    /// The stored bytes are malformed or schema-incompatible.
    #[error("decode failed: {0}")]
    Decode(String),
}
