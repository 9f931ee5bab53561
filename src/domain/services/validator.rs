//! Endpoint Validator
//!
//! Pre-flight check of the raw endpoint string. Runs before any client is
//! constructed and never touches the network.

use crate::domain::error::{ConfigError, EndpointError};
use url::Url;

/// Parse the endpoint exactly as supplied by the host.
///
/// The string goes to the URL parser unmodified. Parsing is the whole
/// check: a URL the HTTP client cannot speak to (`pulsar://`, a bare
/// `host:port`) still passes and fails on its first admin request.
pub fn validate_endpoint(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        endpoint: raw.to_string(),
        source: EndpointError::from(e),
    })
}
