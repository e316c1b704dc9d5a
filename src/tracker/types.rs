//! Values exchanged between the tracker and the host application.

use std::borrow::Cow;

/// Handle of a visit created on the server.
///
/// A `Record` is only produced by a successful create-record call and its id
/// is never empty. The host keeps it (for example in view state) and passes
/// it back to [`Tracker::update`](crate::Tracker::update) later.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    id: String,
}

impl Record {
    pub(crate) fn new(id: String) -> Self {
        debug_assert!(!id.is_empty());
        Self { id }
    }

    /// Returns the server-assigned record id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// An application-defined event type.
///
/// Pairs the id of an event configured in Ackee with the label its values
/// are recorded under. Events are usually declared once as constants:
///
/// ```rust
/// use ackee::Event;
///
/// const PURCHASE: Event = Event::from_static("eventId", "Price");
///
/// assert_eq!(PURCHASE.id(), "eventId");
/// assert_eq!(PURCHASE.key(), "Price");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    id: Cow<'static, str>,
    key: Cow<'static, str>,
}

impl Event {
    /// Creates an event from string literals, usable in `const` items.
    #[must_use]
    pub const fn from_static(id: &'static str, key: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            key: Cow::Borrowed(key),
        }
    }

    /// Creates an event from owned or runtime strings.
    #[must_use]
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            key: Cow::Owned(key.into()),
        }
    }

    /// Returns the Ackee event id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the attribute key values are recorded under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
