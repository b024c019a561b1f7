use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::ApiError;

/// Body encoding used on the wire, split out from the transport so the two
/// can be swapped and tested independently.
pub trait Codec {
    /// Value of the `Content-Type` header for encoded request bodies.
    fn content_type(&self) -> &'static str;

    fn encode<B: Serialize>(&self, body: &B) -> Result<String, ApiError>;

    fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T, ApiError>;
}

/// The backend speaks JSON; this is the only production codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode<B: Serialize>(&self, body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
