//! API Module
//!
//! HTTP surface of the cache server.
//!
//! # Endpoints
//! - `POST /api/cache/:key` - Store the raw body under a key
//! - `POST /api/cache/:key/expire` - Attach an absolute expiration to a key
//! - `GET /api/cache/:key` - Retrieve a value by key
//! - `DELETE /api/cache/:key` - Delete a key

pub mod handlers;
pub mod path;
pub mod routes;

pub use handlers::*;
pub use path::{parse_cache_path, CachePath};
pub use routes::create_router;
