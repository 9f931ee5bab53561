//! Provider Schema
//!
//! Read-only documentation text for provider options and resource
//! attributes, plus the schema the host displays for provider settings.
//! Built once at startup and shared by reference.

use crate::domain::value_objects::ResourceKind;
use serde::Serialize;
use std::collections::HashMap;

/// Attribute description registry.
///
/// Keys are provider option names and resource attribute names. The map is
/// never mutated after construction; share it with `Arc<Descriptions>`.
#[derive(Debug, Clone)]
pub struct Descriptions {
    entries: HashMap<&'static str, &'static str>,
}

impl Descriptions {
    /// The descriptions shipped with the provider.
    pub fn standard() -> Self {
        let entries = HashMap::from([
            (
                "endpoint",
                "Web service url is used to connect to your apache pulsar cluster",
            ),
            (
                "token",
                "Authentication Token used to grant terraform permissions\n\
                 to modify Apache Pulsar Entities",
            ),
            (
                "api_version",
                "Api Version to be used for the pulsar admin interaction",
            ),
            (
                "tls_trust_certs_file_path",
                "Path to a custom trusted TLS certificate file",
            ),
            (
                "tls_allow_insecure_connection",
                "Boolean flag to accept untrusted TLS certificates",
            ),
            ("admin_roles", "Admin roles to be attached to tenant"),
            (
                "allowed_clusters",
                "Tenant will be able to interact with these clusters",
            ),
            (
                "namespace",
                "Pulsar namespaces are logical groupings of topics",
            ),
            (
                "tenant",
                "An administrative unit for allocating capacity and enforcing an\n\
                 authentication/authorization scheme",
            ),
            ("namespace_list", "List of namespaces for a given tenant"),
            (
                "enable_duplication",
                "ensures that each message produced on Pulsar topics is persisted to disk\n\
                 only once, even if the message is produced more than once",
            ),
            (
                "encrypt_topics",
                "encrypt messages at the producer and decrypt at the consumer",
            ),
            ("max_producers_per_topic", "Max number of producers per topic"),
            (
                "max_consumers_per_subscription",
                "Max number of consumers per subscription",
            ),
            ("max_consumers_per_topic", "Max number of consumers per topic"),
            (
                "dispatch_rate",
                "Data transfer rate, in and out of the Pulsar Broker",
            ),
            (
                "persistence_policy",
                "Policy for the namespace for data persistence",
            ),
            ("backlog_quota", ""),
            ("configs", "Configuration encoded as JSON"),
        ]);

        Self { entries }
    }

    /// Description for `key`, or `None` if the attribute is undocumented.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// Description for `key`, empty if the attribute is undocumented.
    pub fn describe(&self, key: &str) -> &'static str {
        self.get(key).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Value type of a provider option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Bool,
}

/// Schema entry for one provider option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSchema {
    pub name: &'static str,
    pub kind: AttributeType,
    pub required: bool,
    /// Environment variable consulted when the option is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<&'static str>,
    pub description: &'static str,
}

/// Provider settings schema and the resource types it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    pub options: Vec<OptionSchema>,
    pub resources: Vec<&'static str>,
}

impl ProviderSchema {
    /// Schema of the provider's own settings block.
    pub fn standard(descriptions: &Descriptions) -> Self {
        let option = |name, kind, required, env_default| OptionSchema {
            name,
            kind,
            required,
            env_default,
            deprecated: None,
            description: descriptions.describe(name),
        };

        let options = vec![
            option("endpoint", AttributeType::String, true, Some("WEB_SERVICE_URL")),
            option("token", AttributeType::String, false, Some("PULSAR_AUTH_TOKEN")),
            OptionSchema {
                deprecated: Some(
                    "The newer versions can use the right version for the right type of resource",
                ),
                ..option("api_version", AttributeType::String, false, None)
            },
            option(
                "tls_trust_certs_file_path",
                AttributeType::String,
                false,
                Some("TLS_TRUST_CERTS_FILE_PATH"),
            ),
            option(
                "tls_allow_insecure_connection",
                AttributeType::Bool,
                false,
                Some("TLS_ALLOW_INSECURE_CONNECTION"),
            ),
        ];

        Self {
            options,
            resources: ResourceKind::ALL.iter().map(|k| k.type_name()).collect(),
        }
    }

    /// Option entry by name.
    pub fn option(&self, name: &str) -> Option<&OptionSchema> {
        self.options.iter().find(|o| o.name == name)
    }
}
