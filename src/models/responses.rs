//! Response DTOs for the cache server API
//!
//! Every body the server writes is an [`Envelope`].

use std::collections::HashMap;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Logical success code.
pub const CODE_OK: i32 = 0;

/// Logical failure code.
pub const CODE_FAILURE: i32 = 1;

/// Uniform `{code, msg, data}` response wrapper.
///
/// `code` reports the logical outcome and is independent of the HTTP status:
/// a 200 response may still carry `code != 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i32,
    pub msg: String,
    pub data: Option<HashMap<String, String>>,
}

impl Envelope {
    /// Creates a success envelope without data.
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_OK,
            msg: msg.into(),
            data: None,
        }
    }

    /// Creates a success envelope carrying a single `key -> value` pair.
    pub fn with_entry(
        msg: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut data = HashMap::with_capacity(1);
        data.insert(key.into(), value.into());
        Self {
            code: CODE_OK,
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// Creates a logical failure envelope.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_FAILURE,
            msg: msg.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_OK
    }

    // == Encode ==
    /// Serializes the envelope to JSON bytes.
    ///
    /// A serialization failure is logged and produces an empty body.
    pub fn encode(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_else(|err| {
            error!("Failed to encode response envelope: {}", err);
            Vec::new()
        })
    }

    /// Builds an HTTP response with the given status and this envelope as body.
    pub fn respond(&self, status: StatusCode) -> Response {
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.encode(),
        )
            .into_response()
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        self.respond(StatusCode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_envelope_serialize() {
        let json: Value = serde_json::from_slice(&Envelope::success("ok").encode()).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_entry_envelope_serialize() {
        let env = Envelope::with_entry("fetched", "key0", "val1");
        let json: Value = serde_json::from_slice(&env.encode()).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["data"]["key0"], "val1");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_failure_envelope() {
        let env = Envelope::failure("nope");
        assert!(!env.is_success());
        assert_eq!(env.code, CODE_FAILURE);
    }

    #[test]
    fn test_into_response_is_json_ok() {
        let response = Envelope::success("ok").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
