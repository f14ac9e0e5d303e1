//! Payload codecs for structured cookie values.
//!
//! A codec turns a typed value into bytes before sealing and back after
//! opening. The binding protocol never sees anything but bytes.
//!
//! Polymorphic payloads are expressed as serde-tagged enums: the type handed
//! to [`PayloadCodec::unmarshal`] is the complete list of shapes the cookie
//! may hold. There is no global type registry.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Byte-in, byte-out serialization for cookie payloads.
pub trait PayloadCodec: Send + Sync {
    /// Serialize `value` to bytes.
    fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;

    /// Deserialize bytes into `T`.
    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;
}

/// CBOR payloads (compact; the default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CborCodec;

impl PayloadCodec for CborCodec {
    fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(buf)
    }

    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        ciborium::from_reader(bytes).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

/// JSON payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| Error::Serialization(e.to_string()))
    }

    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| Error::Deserialization(e.to_string()))
    }
}
