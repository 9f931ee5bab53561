//! Error taxonomy of the configuration pass and of admin requests.

use crate::domain::value_objects::ApiVersion;

/// Why an endpoint string was rejected before any client was built.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),
}

/// Failure to construct a single backend client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to read TLS trust bundle {path}")]
    TrustBundleRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TLS trust bundle {path} is not valid PEM")]
    TrustBundleParse {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TLS trust bundle {path} contains no certificates")]
    EmptyTrustBundle { path: String },
    #[error("authentication token is not a valid header value")]
    InvalidToken,
    #[error("backend client setup failed")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error surfaced to the host by a configuration pass.
///
/// Every variant is terminal for the pass; no registry is produced.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint `{endpoint}`")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: EndpointError,
    },
    #[error("failed to create pulsar client for admin API {version}")]
    ClientConstructionFailed {
        version: ApiVersion,
        #[source]
        source: ClientError,
    },
    #[error("malformed provider settings")]
    MalformedSettings(#[source] serde_json::Error),
    #[error("{name}={value:?} is not a boolean")]
    InvalidFlag { name: String, value: String },
}

impl ConfigError {
    /// Stable diagnostic code reported to the host.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint { .. } => "ERROR_PULSAR_CONFIG_INVALID_WEB_SERVICE_URL",
            Self::ClientConstructionFailed { .. } => "ERROR_PULSAR_CLIENT_CONSTRUCTION_FAILED",
            Self::MalformedSettings(_) | Self::InvalidFlag { .. } => {
                "ERROR_PULSAR_CONFIG_MALFORMED"
            }
        }
    }
}

/// Failure of an admin API request issued through a constructed client.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("admin request failed")]
    Transport(#[from] reqwest::Error),
    #[error("admin API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
