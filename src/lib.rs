//! Pulsar Provider Library
//!
//! Configuration and dispatch layer of the Pulsar infrastructure provider.
//! Turns one set of connection settings into a complete family of admin API
//! clients, one per protocol version, and hands that family to every
//! resource operation of a session.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{FactoryOptions, PulsarAdminClient, PulsarClientFactory};
pub use application::ProviderService;
pub use config::{load_config, ProviderSettings};
pub use domain::entities::{redacted_url, ClientConfig, ConnectionConfig};
pub use domain::error::{AdminError, ClientError, ConfigError, EndpointError};
pub use domain::ports::ClientFactory;
pub use domain::schema::{Descriptions, ProviderSchema};
pub use domain::services::{validate_endpoint, VersionRegistry};
pub use domain::value_objects::{ApiVersion, ResourceKind};
