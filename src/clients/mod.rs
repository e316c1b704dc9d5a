//! HTTP and GraphQL client types for Ackee API communication.
//!
//! This module provides the transport underneath the
//! [`Tracker`](crate::Tracker). It is public so hosts can send mutations
//! directly and see every error, but most applications only need the tracker.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Posts JSON bodies to the configured endpoint
//! - [`HttpResponse`]: Status, headers and body of a response
//! - [`HttpError`]: Transport failures
//! - [`graphql::GraphqlClient`]: Runs a mutation through encode, POST and decode
//! - [`graphql::GraphqlError`]: The unified error of that pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use ackee::EndpointUrl;
//! use ackee::clients::GraphqlClient;
//! use ackee::mutations::CreateAction;
//!
//! let client = GraphqlClient::new(EndpointUrl::new("https://stats.example.com/api")?, None);
//! let action_id = client.send(CreateAction::new("event-id", "Price", 5.0)).await?;
//! ```

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::HttpError;
pub use http_client::{HttpClient, JSON_CONTENT_TYPE, SDK_VERSION};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlRequest, GraphqlResponse};
