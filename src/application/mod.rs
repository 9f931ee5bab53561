//! Application Layer
//!
//! Use cases that orchestrate the domain through its ports.

mod provider_service;

pub use provider_service::{ProviderService, LEGACY_HOST_VERSION};
