//! Error type of the tracker facade.

use crate::clients::GraphqlError;
use thiserror::Error;

/// Error returned by the `try_*` operations of a
/// [`Tracker`](crate::Tracker) and passed to its error hook.
///
/// # Example
///
/// ```rust
/// use ackee::{GraphqlError, TrackerError};
///
/// let error: TrackerError = GraphqlError::Response {
///     message: "domain not found".to_string(),
/// }
/// .into();
/// assert_eq!(error.to_string(), "GraphQL error: domain not found");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The tracker is disabled; nothing was sent.
    #[error("Tracking is disabled")]
    Disabled,

    /// The request pipeline failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
}
