//! Configuration types for the Ackee tracker.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TrackerConfig`]: Everything a [`Tracker`](crate::Tracker) needs to run
//! - [`TrackerConfigBuilder`]: A builder for constructing [`TrackerConfig`] instances
//! - [`DomainId`]: A validated Ackee domain id
//! - [`EndpointUrl`]: A validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use ackee::{Attributes, DomainId, EndpointUrl, TrackerConfig};
//!
//! let config = TrackerConfig::builder()
//!     .url(EndpointUrl::new("https://stats.example.com/api").unwrap())
//!     .domain(DomainId::new("domain_id").unwrap())
//!     .default_attributes(Attributes::builder().os_version("17.4").build())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.is_enabled());
//! ```

mod newtypes;

pub use newtypes::{DomainId, EndpointUrl};

use std::fmt;
use std::sync::Arc;

use crate::attributes::Attributes;
use crate::error::ConfigError;
use crate::tracker::TrackerError;

/// Callback receiving every error a tracker swallows.
///
/// Fire-and-forget operations never return their errors. Installing a hook
/// with [`TrackerConfigBuilder::on_error`] makes them observable, for
/// example to count failures or forward them to a crash reporter.
pub type ErrorHook = Arc<dyn Fn(&TrackerError) + Send + Sync>;

/// Configuration for an Ackee [`Tracker`](crate::Tracker).
///
/// # Thread Safety
///
/// `TrackerConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone)]
pub struct TrackerConfig {
    url: EndpointUrl,
    domain: DomainId,
    default_attributes: Attributes,
    enabled: bool,
    user_agent_prefix: Option<String>,
    error_hook: Option<ErrorHook>,
}

impl TrackerConfig {
    /// Creates a new builder for constructing a `TrackerConfig`.
    #[must_use]
    pub fn builder() -> TrackerConfigBuilder {
        TrackerConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn url(&self) -> &EndpointUrl {
        &self.url
    }

    /// Returns the domain records are created on.
    #[must_use]
    pub const fn domain(&self) -> &DomainId {
        &self.domain
    }

    /// Returns the attributes a tracker starts with.
    #[must_use]
    pub const fn default_attributes(&self) -> &Attributes {
        &self.default_attributes
    }

    /// Returns whether a tracker starts enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the error hook, if configured.
    #[must_use]
    pub const fn error_hook(&self) -> Option<&ErrorHook> {
        self.error_hook.as_ref()
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("url", &self.url)
            .field("domain", &self.domain)
            .field("default_attributes", &self.default_attributes)
            .field("enabled", &self.enabled)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("error_hook", &self.error_hook.as_ref().map(|_| "Fn"))
            .finish()
    }
}

// Verify TrackerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TrackerConfig>();
};

/// Builder for constructing [`TrackerConfig`] instances.
///
/// Required fields are `url` and `domain`.
///
/// # Defaults
///
/// - `default_attributes`: [`Attributes::default()`]
/// - `enabled`: `true`
/// - `user_agent_prefix`: `None`
/// - `on_error`: `None`
#[derive(Default)]
pub struct TrackerConfigBuilder {
    url: Option<EndpointUrl>,
    domain: Option<DomainId>,
    default_attributes: Option<Attributes>,
    enabled: Option<bool>,
    user_agent_prefix: Option<String>,
    error_hook: Option<ErrorHook>,
}

impl fmt::Debug for TrackerConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfigBuilder")
            .field("url", &self.url)
            .field("domain", &self.domain)
            .field("default_attributes", &self.default_attributes)
            .field("enabled", &self.enabled)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("error_hook", &self.error_hook.as_ref().map(|_| "Fn"))
            .finish()
    }
}

impl TrackerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint (required).
    #[must_use]
    pub fn url(mut self, url: EndpointUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the domain id (required).
    #[must_use]
    pub fn domain(mut self, domain: DomainId) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the attributes sent with every record.
    #[must_use]
    pub fn default_attributes(mut self, attributes: Attributes) -> Self {
        self.default_attributes = Some(attributes);
        self
    }

    /// Sets whether the tracker starts enabled.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Installs a callback for errors that fire-and-forget operations swallow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ackee::{DomainId, EndpointUrl, TrackerConfig};
    ///
    /// let config = TrackerConfig::builder()
    ///     .url(EndpointUrl::new("https://stats.example.com/api").unwrap())
    ///     .domain(DomainId::new("domain_id").unwrap())
    ///     .on_error(|error| eprintln!("tracking failed: {error}"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(config.error_hook().is_some());
    /// ```
    #[must_use]
    pub fn on_error(mut self, hook: impl Fn(&TrackerError) + Send + Sync + 'static) -> Self {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    /// Builds the [`TrackerConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `url` or `domain`
    /// are not set.
    pub fn build(self) -> Result<TrackerConfig, ConfigError> {
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })?;
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;

        Ok(TrackerConfig {
            url,
            domain,
            default_attributes: self.default_attributes.unwrap_or_default(),
            enabled: self.enabled.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
            error_hook: self.error_hook,
        })
    }
}
