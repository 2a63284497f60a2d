//! Coralogix provider
//!
//! Manages Coralogix alerts as infrastructure. The heart of the crate is a
//! bidirectional codec between the typed alert configuration users write
//! ([`alert::model::AlertConfig`]) and the alert messages of the Coralogix
//! `AlertService` gRPC API.
//!
//! # Overview
//!
//! - **Codec**: [`expand_alert`] and [`flatten_alert`] translate between the two
//!   shapes, covering the eight alert kinds (standard, ratio, new value,
//!   unique count, time relative, metric, tracing and flow)
//! - **Scheduling**: activity windows are written in a UTC offset and stored
//!   in GMT, with day-of-week rollover
//! - **Validation**: [`validation::validate`] reports every cross-field
//!   problem as a [`Diagnostic`] before anything is sent
//! - **Lifecycle**: [`AlertResource`] drives create, read, update, delete and
//!   import over an [`AlertsClient`]
//! - **Provider**: [`CoralogixProvider`] exposes it all behind the
//!   [`ProviderService`] trait with JSON state
//!
//! # Quick Start
//!
//! ```ignore
//! use coralogix_provider::{CoralogixProvider, ProviderService};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     coralogix_provider::init_logging();
//!
//!     let provider = CoralogixProvider::new();
//!     provider.configure(json!({"env": "EUROPE2"})).await?;
//!
//!     let state = provider.create("coralogix_alert", json!({
//!         "name": "checkout errors",
//!         "severity": "Critical",
//!         "standard": {
//!             "applications": ["checkout"],
//!             "condition": {"more_than": true, "occurrences_threshold": 10, "time_window": "5Min"}
//!         }
//!     })).await?;
//!
//!     println!("created {}", state["id"]);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod alert;
pub mod client;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod logging;
pub mod provider;
pub mod testing;
pub mod types;
pub mod validation;

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod generated;

// Re-export main types at crate root
pub use alert::{expand_alert, flatten_alert, AlertConfig, AlertResource};
pub use client::{AlertsClient, GrpcAlertsClient};
pub use config::{ProviderConfig, Timeouts};
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use error::ProviderError;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use provider::{CoralogixProvider, ProviderService};
pub use types::{ImportedResource, ProviderMetadata, ALERT_RESOURCE_TYPE};
pub use validation::{is_valid, validate, validate_result};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

// Re-export commonly used external types
pub use serde_json;
pub use tonic;
