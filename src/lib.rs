//! kv_endpoint - A minimal in-memory key-value caching endpoint
//!
//! Stores opaque string values under string keys over HTTP, with optional
//! absolute expiration judged at read time.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
