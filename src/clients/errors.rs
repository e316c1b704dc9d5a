//! HTTP-level error types.
//!
//! The transport layer only fails when no response could be obtained at
//! all. Any response that arrives, whatever its status code, is handed to
//! the GraphQL layer, which decides how to interpret the body.
//!
//! # Example
//!
//! ```rust,ignore
//! use ackee::clients::{HttpClient, HttpError};
//!
//! match client.post_json(body).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for HTTP transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection, TLS, timeout or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
