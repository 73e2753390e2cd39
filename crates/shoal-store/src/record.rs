use serde::de::DeserializeOwned;
use serde::Serialize;

use shoal_codec::CodecError;

use crate::error::ContractError;

/// Field shape of one entity kind.
///
/// The serialized value carries only the fields — identity lives in the
/// world-state key and is reattached at the query boundary by
/// [`encode_document`]. `FIELDS` names the creation arguments in call
/// order; [`AssetStore`](crate::store::AssetStore) validates the argument
/// count against it before `from_args` runs, so implementations may index
/// `args` directly.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Entity kind name, used in logs.
    const KIND: &'static str;

    /// Creation-argument names in call order.
    const FIELDS: &'static [&'static str];

    /// Build a record from creation arguments, one per `FIELDS` entry.
    ///
    /// Arguments that fail to parse surface as
    /// [`ContractError::InvalidArgument`].
    fn from_args(args: &[String]) -> Result<Self, ContractError>;
}

/// An entity kind with a mutable holder attribute.
///
/// The holder is the one field that changes over an entity's lifetime;
/// every other field is written once at creation.
pub trait HolderRecord: Record {
    /// Current holder of the entity.
    fn holder(&self) -> &str;

    /// Replace the holder, leaving all other fields untouched.
    fn set_holder(&mut self, holder: String);
}

/// One query result: an entity rewrapped with its world-state key.
#[derive(Serialize)]
struct Document<'a, T: Serialize> {
    id: &'a str,
    #[serde(flatten)]
    record: &'a T,
}

/// Serialize an entity together with its key as `{"id": <key>, <fields>}`.
pub fn encode_document<T: Serialize>(id: &str, record: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(&Document { id, record })
        .map_err(|err| CodecError::Encode(err.to_string()))
}
