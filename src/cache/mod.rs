//! Cache Module
//!
//! Provides the in-memory key-value store with lazy absolute expiration.

mod entry;
mod store;


// Re-export public types
pub use entry::{current_timestamp, CacheEntry};
pub use store::CacheStore;
