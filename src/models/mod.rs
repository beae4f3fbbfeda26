//! Request and Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! decoding request bodies and encoding the response envelope.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ExpireRequest;
pub use responses::{Envelope, CODE_FAILURE, CODE_OK};
