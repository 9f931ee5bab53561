//! Pulsar Client Factory
//!
//! Implements ClientFactory on top of reqwest with the rustls TLS backend.
//! Each call produces an independent HTTP client carrying the session's
//! credentials and trust settings.

use crate::adapters::outbound::PulsarAdminClient;
use crate::domain::entities::{redacted_url, ClientConfig, ConnectionConfig};
use crate::domain::error::ClientError;
use crate::domain::ports::ClientFactory;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use rustls::pki_types::CertificateDer;
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

/// HTTP settings applied to every client the factory builds.
#[derive(Debug, Clone)]
pub struct FactoryOptions {
    /// Total timeout of a single admin request (default: 30s)
    pub request_timeout: Duration,
    /// Timeout for establishing a connection (default: 10s)
    pub connect_timeout: Duration,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl FactoryOptions {
    /// Set the request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Production client factory.
#[derive(Debug, Clone, Default)]
pub struct PulsarClientFactory {
    options: FactoryOptions,
}

impl PulsarClientFactory {
    pub fn new(options: FactoryOptions) -> Self {
        Self { options }
    }

    fn http_client(&self, connection: &ConnectionConfig) -> Result<reqwest::Client, ClientError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(connection.user_agent())
            .timeout(self.options.request_timeout)
            .connect_timeout(self.options.connect_timeout)
            .default_headers(auth_headers(connection.token())?);

        if !connection.tls_trust_certs_file_path().is_empty() {
            for cert in load_trust_bundle(connection.tls_trust_certs_file_path())? {
                let cert = reqwest::Certificate::from_der(cert.as_ref())
                    .map_err(|e| ClientError::Backend(Box::new(e)))?;
                builder = builder.add_root_certificate(cert);
            }
        }

        if connection.tls_allow_insecure_connection() {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(|e| ClientError::Backend(Box::new(e)))
    }
}

#[async_trait]
impl ClientFactory for PulsarClientFactory {
    type Client = PulsarAdminClient;

    async fn build(&self, config: &ClientConfig) -> Result<PulsarAdminClient, ClientError> {
        let http = self.http_client(&config.connection)?;
        let base_url = config.base_url();

        tracing::debug!(
            "admin client ready version={} base_url={}",
            config.version,
            redacted_url(&base_url)
        );

        Ok(PulsarAdminClient::new(config.version, base_url, http))
    }
}

/// Default headers carrying the bearer token, if any.
fn auth_headers(token: &str) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    if token.is_empty() {
        return Ok(headers);
    }

    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| ClientError::InvalidToken)?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);

    Ok(headers)
}

/// Read every certificate from a PEM trust bundle.
fn load_trust_bundle(path: &str) -> Result<Vec<CertificateDer<'static>>, ClientError> {
    let file = File::open(path).map_err(|source| ClientError::TrustBundleRead {
        path: path.to_string(),
        source,
    })?;

    let certs = rustls_pemfile::certs(&mut BufReader::new(file))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ClientError::TrustBundleParse {
            path: path.to_string(),
            source,
        })?;

    if certs.is_empty() {
        return Err(ClientError::EmptyTrustBundle {
            path: path.to_string(),
        });
    }

    Ok(certs)
}
