//! API Handlers
//!
//! Dispatches cache requests to the store and maps results onto HTTP.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use super::path::{parse_cache_path, CachePath};
use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::Envelope;

/// Application state shared across all handlers.
///
/// Contains the cache store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone, Default)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

/// Handler for every method on `/api/cache/...`
///
/// Path validity is checked before the method, so a malformed path is a 403
/// whatever the method or body. The body is taken as raw bytes and only
/// decoded by the operation that needs it.
pub async fn cache_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = parse_cache_path(uri.path());
    if !path.is_valid() {
        warn!(path = %uri.path(), "rejected malformed cache path");
        return CacheError::InvalidPath(uri.path().to_string()).into_response();
    }

    match method {
        Method::POST => post_handler(&state, &path, body).await,
        Method::GET => get_handler(&state, &path.key).await,
        Method::DELETE => logical(delete_handler(&state, &path.key).await),
        other => {
            debug!(method = %other, "rejected unsupported method");
            CacheError::MethodNotAllowed(other.to_string()).into_response()
        }
    }
}

/// POST without modifier sets the value, POST `/expire` updates expiration.
async fn post_handler(state: &AppState, path: &CachePath, body: Bytes) -> Response {
    if !path.has_modifier() {
        let value = match String::from_utf8(body.to_vec()) {
            Ok(value) => value,
            Err(_) => return logical(Err(CacheError::InvalidValue(path.key.clone()))),
        };

        let mut cache = state.cache.write().await;
        return logical(
            cache
                .set(path.key.clone(), value)
                .map(|_| Envelope::success("cache set")),
        );
    }

    if path.is_expire() {
        let mut cache = state.cache.write().await;
        return logical(
            cache
                .set_expire(&path.key, &body)
                .map(|_| Envelope::success("cache expiration set")),
        );
    }

    warn!(key = %path.key, modifier = %path.modifier, "rejected unknown modifier");
    CacheError::InvalidPath(format!("unknown modifier '{}'", path.modifier)).into_response()
}

/// GET reports a missing or expired key at the transport level.
async fn get_handler(state: &AppState, key: &str) -> Response {
    // Write lock: reads may purge an expired entry
    let mut cache = state.cache.write().await;
    match cache.get(key) {
        Ok(value) => Envelope::with_entry("cache fetched", key, value).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn delete_handler(state: &AppState, key: &str) -> Result<Envelope> {
    let mut cache = state.cache.write().await;
    cache.delete(key)?;
    Ok(Envelope::success("cache deleted"))
}

/// Reports store failures inside a 200 envelope with a non-zero code.
fn logical(result: Result<Envelope>) -> Response {
    match result {
        Ok(envelope) => envelope.into_response(),
        Err(err) => {
            debug!(error = %err, "logical failure");
            Envelope::failure(err.to_string()).respond(StatusCode::OK)
        }
    }
}
