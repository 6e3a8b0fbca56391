//! Backoffice API client
//!
//! - `client` - reqwest transport implementing `BackofficeClient`
//! - `wire` - PascalCase request/response shapes of the remote API

mod client;
mod wire;

pub use client::{HttpBackofficeClient, MAX_ERROR_BODY_CHARS};
