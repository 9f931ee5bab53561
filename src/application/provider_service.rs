//! Provider Service - Configuration entry point
//!
//! Runs the configuration pass: validates the endpoint, normalizes the
//! connection settings, and builds the version registry through the client
//! factory port. The resulting registry is the session context handed to
//! every resource operation.

use crate::config::ProviderSettings;
use crate::domain::entities::ConnectionConfig;
use crate::domain::error::ConfigError;
use crate::domain::ports::ClientFactory;
use crate::domain::schema::{Descriptions, ProviderSchema};
use crate::domain::services::{validate_endpoint, VersionRegistry};
use std::sync::Arc;

/// Host version assumed when the host does not announce one.
pub const LEGACY_HOST_VERSION: &str = "0.11+compatible";

/// Provider configuration service.
///
/// Holds no per-session state: every [`configure`](Self::configure) call
/// builds a fresh registry with freshly constructed clients.
pub struct ProviderService<C> {
    factory: Arc<dyn ClientFactory<Client = C>>,
    descriptions: Arc<Descriptions>,
    host_version: String,
}

impl<C> ProviderService<C>
where
    C: Send + Sync + std::fmt::Debug + 'static,
{
    /// Create a new provider service.
    pub fn new<F>(factory: Arc<F>, descriptions: Arc<Descriptions>) -> Self
    where
        F: ClientFactory<Client = C> + 'static,
    {
        Self {
            factory,
            descriptions,
            host_version: LEGACY_HOST_VERSION.to_string(),
        }
    }

    /// Record the version string announced by the host.
    ///
    /// Hosts before 0.12 never send one; a missing or empty value falls back
    /// to [`LEGACY_HOST_VERSION`].
    pub fn with_host_version(mut self, version: Option<&str>) -> Self {
        self.host_version = match version {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => LEGACY_HOST_VERSION.to_string(),
        };
        self
    }

    pub fn host_version(&self) -> &str {
        &self.host_version
    }

    /// `User-Agent` sent by every admin client of this provider.
    pub fn user_agent(&self) -> String {
        format!(
            "pulsar-provider/{} (host {})",
            env!("CARGO_PKG_VERSION"),
            self.host_version
        )
    }

    pub fn descriptions(&self) -> &Descriptions {
        &self.descriptions
    }

    /// Schema of the provider settings block.
    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema::standard(&self.descriptions)
    }

    /// Run a configuration pass.
    ///
    /// Each step gates the next:
    /// 1. Validate the raw endpoint (no client is built on failure)
    /// 2. Normalize settings into a [`ConnectionConfig`]
    /// 3. Build one client per admin API version, all or nothing
    pub async fn configure(
        &self,
        settings: &ProviderSettings,
    ) -> Result<VersionRegistry<C>, ConfigError> {
        if let Some(api_version) = &settings.api_version {
            tracing::warn!(
                "api_version={} is deprecated and ignored, every admin API version is configured",
                api_version
            );
        }

        let endpoint = validate_endpoint(settings.endpoint.as_deref().unwrap_or_default())?;

        let connection = ConnectionConfig::new(
            endpoint,
            settings.token.clone(),
            settings.tls_trust_certs_file_path.clone(),
            settings.tls_allow_insecure_connection,
            self.user_agent(),
        );

        tracing::info!(
            "configuring provider endpoint={} token={} tls_trust_certs_file_path={:?} tls_allow_insecure_connection={}",
            connection.redacted_endpoint(),
            !connection.token().is_empty(),
            connection.tls_trust_certs_file_path(),
            connection.tls_allow_insecure_connection(),
        );

        let factory = &self.factory;
        let registry = VersionRegistry::try_build(|version| {
            let config = connection.for_version(version);
            async move {
                factory.build(&config).await.map_err(|source| {
                    tracing::error!("admin client construction failed version={}: {}", version, source);
                    ConfigError::ClientConstructionFailed { version, source }
                })
            }
        })
        .await?;

        tracing::info!(
            "provider configured endpoint={} clients={}",
            connection.redacted_endpoint(),
            registry.len()
        );

        Ok(registry)
    }

    /// Run a configuration pass from the raw settings object of the host.
    ///
    /// Options absent from the object are filled from the process
    /// environment before the pass runs.
    pub async fn configure_json(
        &self,
        raw: serde_json::Value,
    ) -> Result<VersionRegistry<C>, ConfigError> {
        self.configure_json_with(raw, |key| std::env::var(key).ok()).await
    }

    /// Like [`configure_json`](Self::configure_json), with environment
    /// fallbacks read through `lookup`.
    pub async fn configure_json_with<F>(
        &self,
        raw: serde_json::Value,
        lookup: F,
    ) -> Result<VersionRegistry<C>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = ProviderSettings::from_json(raw)
            .map_err(ConfigError::MalformedSettings)?
            .with_env_defaults_from(lookup)?;

        self.configure(&settings).await
    }
}
