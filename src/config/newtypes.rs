//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Ackee domain id.
///
/// Every record created by a tracker is scoped to this domain. The newtype
/// ensures the id is non-empty.
///
/// # Serialization
///
/// `DomainId` serializes as a plain JSON string, which is how it is sent in
/// the `domainId` variable of the create-record mutation:
///
/// ```rust
/// use ackee::DomainId;
///
/// let domain = DomainId::new("b2c9a1f0").unwrap();
/// assert_eq!(serde_json::to_string(&domain).unwrap(), r#""b2c9a1f0""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DomainId(String);

impl DomainId {
    /// Creates a new validated domain id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDomainId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyDomainId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for DomainId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DomainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DomainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated GraphQL endpoint of an Ackee server.
///
/// Only absolute `http` and `https` URLs are accepted.
///
/// # Example
///
/// ```rust
/// use ackee::EndpointUrl;
///
/// let url = EndpointUrl::new("https://stats.example.com/api").unwrap();
/// assert_eq!(url.as_ref(), "https://stats.example.com/api");
/// assert_eq!(url.host_name(), Some("stats.example.com"));
///
/// assert!(EndpointUrl::new("stats.example.com/api").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(reqwest::Url);

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL cannot be parsed,
    /// has no host, or uses a scheme other than `http`/`https`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|_| ConfigError::InvalidEndpointUrl { url: url.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidEndpointUrl { url });
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &reqwest::Url {
        &self.0
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        // `Url` normalizes an empty path to "/", keep the caller's form.
        let s = self.0.as_str();
        if self.0.path() == "/" && self.0.query().is_none() && self.0.fragment().is_none() {
            s.strip_suffix('/').unwrap_or(s)
        } else {
            s
        }
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
