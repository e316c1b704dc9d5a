//! GraphQL layer of the Ackee client.
//!
//! This module turns a [`Mutation`](crate::mutations::Mutation) into an HTTP
//! request and the HTTP response back into a typed result.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GraphqlClient`]: Sends mutations and decodes their results
//! - [`GraphqlRequest`]: The `{query, variables}` request envelope
//! - [`GraphqlResponse`]: The `{data, errors}` response envelope
//! - [`GraphqlError`]: The unified error of the pipeline
//!
//! # Response Structure
//!
//! Ackee answers with HTTP 200 for most GraphQL failures and puts them in the
//! `errors` list of the body:
//!
//! - `data`: The mutation result, or `null`
//! - `errors`: A list of `{ "message": .. }` objects, or `null`
//!
//! A non-empty `errors` list always wins over `data`.
//!
//! # Retry Behavior
//!
//! Requests are attempted exactly once. Tracking is best-effort.

mod client;
mod envelope;
mod errors;

pub use client::GraphqlClient;
pub use envelope::{GraphqlErrorObject, GraphqlRequest, GraphqlResponse};
pub use errors::GraphqlError;
