//! Client context attached to every created record.
//!
//! [`Attributes`] describes where a visit happened (page path, language) and
//! on what kind of client (screen, device, OS, browser). A tracker keeps one
//! set of default attributes and sends a copy of it, with the visited path
//! filled in, on every [`Tracker::record`](crate::Tracker::record) call.
//!
//! # Example
//!
//! ```rust
//! use ackee::Attributes;
//!
//! let attributes = Attributes::builder()
//!     .os_version("17.4")
//!     .device_name("iPhone15,2")
//!     .screen_size(393.0, 852.0)
//!     .build();
//!
//! assert_eq!(attributes.os_name(), "iOS");
//! assert_eq!(attributes.browser_width(), Some(393.0));
//! ```

use serde::{Deserialize, Serialize};

/// Default value of the `deviceManufacturer` attribute.
pub const DEFAULT_DEVICE_MANUFACTURER: &str = "Apple";

/// Default value of the `osName` attribute.
pub const DEFAULT_OS_NAME: &str = "iOS";

/// Default value of the `browserName` attribute.
pub const DEFAULT_BROWSER_NAME: &str = "Structured iOS";

/// Contextual metadata sent with a create-record request.
///
/// Field names on the wire match the `CreateRecordInput` type of the Ackee
/// schema. Absent optional values are omitted from the JSON object. Sizes must
/// be finite to serialize; nothing else is validated.
///
/// `browser_width` and `browser_height` always mirror the screen size given
/// at construction and have no setters of their own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    site_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    site_language: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::mutations::finite::serialize_option"
    )]
    screen_width: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::mutations::finite::serialize_option"
    )]
    screen_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_name: Option<String>,
    device_manufacturer: String,
    os_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    os_version: Option<String>,
    browser_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    browser_version: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::mutations::finite::serialize_option"
    )]
    browser_width: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::mutations::finite::serialize_option"
    )]
    browser_height: Option<f64>,
}

impl Default for Attributes {
    fn default() -> Self {
        AttributesBuilder::new().build()
    }
}

impl Attributes {
    /// Creates a new builder for constructing `Attributes`.
    #[must_use]
    pub fn builder() -> AttributesBuilder {
        AttributesBuilder::new()
    }

    /// Returns a copy of these attributes with `siteLocation` set to `path`.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn with_site_location(&self, path: impl Into<String>) -> Self {
        Self {
            site_location: Some(path.into()),
            ..self.clone()
        }
    }

    /// Returns the visited page path, if set.
    #[must_use]
    pub fn site_location(&self) -> Option<&str> {
        self.site_location.as_deref()
    }

    /// Returns the UI language, if set.
    #[must_use]
    pub fn site_language(&self) -> Option<&str> {
        self.site_language.as_deref()
    }

    /// Returns the screen width, if set.
    #[must_use]
    pub const fn screen_width(&self) -> Option<f64> {
        self.screen_width
    }

    /// Returns the screen height, if set.
    #[must_use]
    pub const fn screen_height(&self) -> Option<f64> {
        self.screen_height
    }

    /// Returns the device model name, if set.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Returns the device manufacturer.
    #[must_use]
    pub fn device_manufacturer(&self) -> &str {
        &self.device_manufacturer
    }

    /// Returns the operating system name.
    #[must_use]
    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    /// Returns the operating system version, if set.
    #[must_use]
    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    /// Returns the browser (client application) name.
    #[must_use]
    pub fn browser_name(&self) -> &str {
        &self.browser_name
    }

    /// Returns the browser (client application) version, if set.
    #[must_use]
    pub fn browser_version(&self) -> Option<&str> {
        self.browser_version.as_deref()
    }

    /// Returns the browser width, equal to the screen width.
    #[must_use]
    pub const fn browser_width(&self) -> Option<f64> {
        self.browser_width
    }

    /// Returns the browser height, equal to the screen height.
    #[must_use]
    pub const fn browser_height(&self) -> Option<f64> {
        self.browser_height
    }
}

/// Builder for constructing [`Attributes`] instances.
///
/// # Defaults
///
/// - `device_manufacturer`: `"Apple"`
/// - `os_name`: `"iOS"`
/// - `browser_name`: `"Structured iOS"`
/// - everything else: unset
#[derive(Debug, Default)]
pub struct AttributesBuilder {
    site_language: Option<String>,
    screen_width: Option<f64>,
    screen_height: Option<f64>,
    device_name: Option<String>,
    device_manufacturer: Option<String>,
    os_name: Option<String>,
    os_version: Option<String>,
    browser_name: Option<String>,
    browser_version: Option<String>,
}

impl AttributesBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the UI language (e.g. "en").
    #[must_use]
    pub fn site_language(mut self, language: impl Into<String>) -> Self {
        self.site_language = Some(language.into());
        self
    }

    /// Sets the screen size. The browser size is derived from it.
    #[must_use]
    pub const fn screen_size(mut self, width: f64, height: f64) -> Self {
        self.screen_width = Some(width);
        self.screen_height = Some(height);
        self
    }

    /// Sets the device model name.
    #[must_use]
    pub fn device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    /// Overrides the device manufacturer.
    #[must_use]
    pub fn device_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.device_manufacturer = Some(manufacturer.into());
        self
    }

    /// Overrides the operating system name.
    #[must_use]
    pub fn os_name(mut self, name: impl Into<String>) -> Self {
        self.os_name = Some(name.into());
        self
    }

    /// Sets the operating system version.
    #[must_use]
    pub fn os_version(mut self, version: impl Into<String>) -> Self {
        self.os_version = Some(version.into());
        self
    }

    /// Overrides the browser (client application) name.
    #[must_use]
    pub fn browser_name(mut self, name: impl Into<String>) -> Self {
        self.browser_name = Some(name.into());
        self
    }

    /// Sets the browser (client application) version.
    #[must_use]
    pub fn browser_version(mut self, version: impl Into<String>) -> Self {
        self.browser_version = Some(version.into());
        self
    }

    /// Builds the [`Attributes`].
    #[must_use]
    pub fn build(self) -> Attributes {
        Attributes {
            site_location: None,
            site_language: self.site_language,
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            device_name: self.device_name,
            device_manufacturer: self
                .device_manufacturer
                .unwrap_or_else(|| DEFAULT_DEVICE_MANUFACTURER.to_string()),
            os_name: self.os_name.unwrap_or_else(|| DEFAULT_OS_NAME.to_string()),
            os_version: self.os_version,
            browser_name: self
                .browser_name
                .unwrap_or_else(|| DEFAULT_BROWSER_NAME.to_string()),
            browser_version: self.browser_version,
            browser_width: self.screen_width,
            browser_height: self.screen_height,
        }
    }
}
