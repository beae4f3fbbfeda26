//! Request DTOs for the cache server API
//!
//! Set bodies are opaque strings; only the expire-update body has structure.

use serde::{Deserialize, Deserializer};

use crate::error::{CacheError, Result};

/// Request body for the expire-update operation (POST /api/cache/:key/expire)
///
/// `expire` is an absolute Unix timestamp in seconds, given either as a JSON
/// integer or as a string holding one. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpireRequest {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub expire: i64,
}

impl ExpireRequest {
    /// Decodes a raw request body.
    ///
    /// Empty or malformed payloads, including bytes that are not UTF-8, are
    /// rejected rather than treated as "no expiration".
    pub fn parse(raw: impl AsRef<[u8]>) -> Result<Self> {
        let raw = raw.as_ref();
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Err(CacheError::InvalidExpire("empty payload".to_string()));
        }
        serde_json::from_slice(raw).map_err(|e| CacheError::InvalidExpire(e.to_string()))
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Int(i64),
        Text(String),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::Int(secs) => Ok(secs),
        Timestamp::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expire is not a timestamp: {text:?}"))),
    }
}
