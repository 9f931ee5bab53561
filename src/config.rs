use crate::domain::error::ConfigError;
use serde::Deserialize;

/// Provider settings as supplied by the host.
///
/// Every field is kept exactly as received; validation and defaulting
/// happen in the configuration pass.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProviderSettings {
    /// Admin web service URL of the Pulsar cluster
    #[serde(default, alias = "web_service_url")]
    pub endpoint: Option<String>,
    /// Bearer token for the admin API
    #[serde(default)]
    pub token: Option<String>,
    /// Deprecated; every admin API version is always configured
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub tls_trust_certs_file_path: Option<String>,
    #[serde(default)]
    pub tls_allow_insecure_connection: Option<bool>,
}

impl ProviderSettings {
    /// Settings with only the endpoint set.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Default::default()
        }
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the trust bundle path.
    pub fn tls_trust_certs_file_path(mut self, path: impl Into<String>) -> Self {
        self.tls_trust_certs_file_path = Some(path.into());
        self
    }

    /// Set the insecure-connection flag.
    pub fn tls_allow_insecure_connection(mut self, allow: bool) -> Self {
        self.tls_allow_insecure_connection = Some(allow);
        self
    }

    /// Parse the raw settings object sent by the host.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Fill options the host left unset from the process environment.
    pub fn with_env_defaults(self) -> Result<Self, ConfigError> {
        self.with_env_defaults_from(|key| std::env::var(key).ok())
    }

    /// Fill unset options from `lookup`, keyed by environment variable name.
    ///
    /// Options the host set explicitly are never overridden. A boolean
    /// variable that does not parse is an error, not `false`.
    pub fn with_env_defaults_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.endpoint.is_none() {
            self.endpoint = lookup("WEB_SERVICE_URL");
        }
        if self.token.is_none() {
            self.token = lookup("PULSAR_AUTH_TOKEN");
        }
        if self.tls_trust_certs_file_path.is_none() {
            self.tls_trust_certs_file_path = lookup("TLS_TRUST_CERTS_FILE_PATH");
        }
        if self.tls_allow_insecure_connection.is_none() {
            self.tls_allow_insecure_connection =
                lookup_flag(&lookup, "TLS_ALLOW_INSECURE_CONNECTION")?;
        }
        Ok(self)
    }
}

/// Process configuration of the provider binary.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: ProviderSettings,
    /// Version string of the orchestrating host, if it announced one
    pub host_version: Option<String>,
    /// List clusters through the admin API after configuring
    pub probe: bool,
    pub debug: bool,
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through `lookup`, keyed by environment variable name.
pub fn load_config_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = ProviderSettings::default().with_env_defaults_from(&lookup)?;

    let host_version = lookup("PULSAR_PROVIDER_HOST_VERSION");

    let probe = lookup_flag(&lookup, "PULSAR_PROVIDER_PROBE")?.unwrap_or(false);

    let debug = lookup("DEBUG").is_some();

    Ok(Config {
        settings,
        host_version,
        probe,
        debug,
    })
}

fn lookup_flag<F>(lookup: &F, name: &str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            parse_flag(&value).ok_or_else(|| ConfigError::InvalidFlag {
                name: name.to_string(),
                value,
            })
        })
        .transpose()
}

/// Accepts the spellings of a boolean understood by the host.
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Some(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}
