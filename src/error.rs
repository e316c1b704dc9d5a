//! Error types for tracker configuration.
//!
//! This module contains the error type returned while building a
//! [`TrackerConfig`](crate::TrackerConfig) or constructing a
//! [`Tracker`](crate::Tracker).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Request-time failures never surface as
//! `ConfigError`; see [`GraphqlError`](crate::GraphqlError) for those.
//!
//! # Example
//!
//! ```rust
//! use ackee::{ConfigError, DomainId};
//!
//! let result = DomainId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyDomainId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a tracker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Domain id cannot be empty.
    #[error("Domain id cannot be empty. Please provide the id of an Ackee domain.")]
    EmptyDomainId,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://stats.example.com/api').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// No tokio runtime was available to run tracking tasks on.
    #[error("No tokio runtime is running. Create the tracker inside a runtime or use Tracker::with_runtime.")]
    NoRuntime,
}
