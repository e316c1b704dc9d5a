//! # Ackee Tracker
//!
//! An async Rust client for recording visits and actions on an
//! [Ackee](https://ackee.electerious.com) analytics server through its
//! GraphQL API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TrackerConfig`] and [`TrackerConfigBuilder`]
//! - Validated newtypes for the endpoint URL and domain id
//! - Client context via [`Attributes`]
//! - A fire-and-forget [`Tracker`] for host applications
//! - The typed [`mutations`] and the [`clients`] that send them
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ackee::{Attributes, DomainId, EndpointUrl, Event, Tracker, TrackerConfig};
//!
//! const PURCHASE: Event = Event::from_static("eventId", "Price");
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TrackerConfig::builder()
//!         .url(EndpointUrl::new("https://stats.example.com/api")?)
//!         .domain(DomainId::new("domain_id")?)
//!         .default_attributes(
//!             Attributes::builder()
//!                 .os_version("17.4")
//!                 .screen_size(393.0, 852.0)
//!                 .build(),
//!         )
//!         .build()?;
//!
//!     let tracker = Tracker::new(config)?;
//!
//!     // Start a visit; the record arrives once the server answered.
//!     tracker.record("app.structured.today/sheet", |record| {
//!         if let Some(record) = record {
//!             println!("Visit {}", record.id());
//!         }
//!     });
//!
//!     tracker.action(&PURCHASE, 5.0);
//!
//!     tracker.wait_idle().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Tracking never fails loudly. [`Tracker::record`] hands `None` to its sink
//! on failure, [`Tracker::update`] and [`Tracker::action`] log and drop their
//! errors. Every dropped error is logged through `tracing` and passed to the
//! hook installed with [`TrackerConfigBuilder::on_error`]. The `try_*`
//! methods return a [`TrackerError`] instead.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Owned tasks**: A tracker aborts its in-flight requests when dropped

pub mod attributes;
pub mod clients;
pub mod config;
pub mod error;
pub mod mutations;
pub mod tracker;

// Re-export public types at crate root for convenience
pub use attributes::{Attributes, AttributesBuilder};
pub use config::{DomainId, EndpointUrl, ErrorHook, TrackerConfig, TrackerConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse};

// Re-export tracker types
pub use tracker::{Event, Record, Tracker, TrackerError, DEFAULT_ACTION_VALUE};
