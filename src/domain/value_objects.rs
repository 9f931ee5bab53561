//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Revision of the Pulsar admin REST API a client speaks.
///
/// The set is closed: every configuration pass builds exactly one client
/// for each variant, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Legacy admin API (`/admin`)
    V1,
    /// Current admin API (`/admin/v2`), used by most resources
    V2,
    /// Functions/IO admin API (`/admin/v3`)
    V3,
}

impl ApiVersion {
    /// Number of supported versions.
    pub const COUNT: usize = 3;

    /// Every supported version, in build order.
    pub const ALL: [ApiVersion; Self::COUNT] = [Self::V1, Self::V2, Self::V3];

    /// Position of this version in [`ApiVersion::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::V1 => 0,
            Self::V2 => 1,
            Self::V3 => 2,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }

    /// REST path prefix of this admin API revision.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Self::V1 => "/admin",
            Self::V2 => "/admin/v2",
            Self::V3 => "/admin/v3",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string names no supported admin API version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown admin API version `{0}`")]
pub struct UnknownApiVersion(pub String);

impl FromStr for ApiVersion {
    type Err = UnknownApiVersion;

    /// Accepts `1`, `v1`, `V1` and the same forms for 2 and 3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "v1" => Ok(Self::V1),
            "2" | "v2" => Ok(Self::V2),
            "3" | "v3" => Ok(Self::V3),
            _ => Err(UnknownApiVersion(s.to_string())),
        }
    }
}

/// Resource types managed by the provider.
///
/// Each kind talks to the admin API through exactly one protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Tenant,
    Cluster,
    Namespace,
    Topic,
    Sink,
}

impl ResourceKind {
    /// Every resource kind, in schema order.
    pub const ALL: [ResourceKind; 5] = [
        Self::Tenant,
        Self::Cluster,
        Self::Namespace,
        Self::Topic,
        Self::Sink,
    ];

    /// Resource type name as declared in host configuration.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Tenant => "pulsar_tenant",
            Self::Cluster => "pulsar_cluster",
            Self::Namespace => "pulsar_namespace",
            Self::Topic => "pulsar_topic",
            Self::Sink => "pulsar_sink",
        }
    }

    /// Admin API version this resource's CRUD calls go through.
    pub fn api_version(&self) -> ApiVersion {
        match self {
            Self::Tenant | Self::Cluster | Self::Namespace | Self::Topic => ApiVersion::V2,
            // Sinks live under the functions worker API
            Self::Sink => ApiVersion::V3,
        }
    }

    /// Look up a kind by its resource type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ApiVersion Tests =====

    #[test]
    fn test_version_index_matches_all_order() {
        for (i, version) in ApiVersion::ALL.iter().enumerate() {
            assert_eq!(version.index(), i, "index mismatch for {}", version);
        }
    }

    #[test]
    fn test_version_all_is_distinct() {
        let mut seen = std::collections::HashSet::new();
        for version in ApiVersion::ALL {
            assert!(seen.insert(version));
        }
        assert_eq!(seen.len(), ApiVersion::COUNT);
    }

    #[test]
    fn test_version_parse_accepted_forms() {
        let tests = vec![
            ("1", ApiVersion::V1),
            ("v1", ApiVersion::V1),
            ("V2", ApiVersion::V2),
            ("2", ApiVersion::V2),
            (" v3 ", ApiVersion::V3),
            ("3", ApiVersion::V3),
        ];

        for (input, expected) in tests {
            assert_eq!(
                input.parse::<ApiVersion>().unwrap(),
                expected,
                "Failed for input: {}",
                input
            );
        }
    }

    #[test]
    fn test_version_parse_rejects_unknown() {
        for input in ["", "0", "v4", "latest"] {
            let err = input.parse::<ApiVersion>().unwrap_err();
            assert_eq!(err, UnknownApiVersion(input.to_string()));
        }
    }

    #[test]
    fn test_version_path_prefix() {
        assert_eq!(ApiVersion::V1.path_prefix(), "/admin");
        assert_eq!(ApiVersion::V2.path_prefix(), "/admin/v2");
        assert_eq!(ApiVersion::V3.path_prefix(), "/admin/v3");
    }

    #[test]
    fn test_version_display() {
        assert_eq!(format!("{}", ApiVersion::V1), "v1");
        assert_eq!(format!("{}", ApiVersion::V3), "v3");
    }

    #[test]
    fn test_version_serde_lowercase() {
        let json = serde_json::to_string(&ApiVersion::V2).unwrap();
        assert_eq!(json, "\"v2\"");
    }

    // ===== ResourceKind Tests =====

    #[test]
    fn test_resource_routing() {
        assert_eq!(ResourceKind::Tenant.api_version(), ApiVersion::V2);
        assert_eq!(ResourceKind::Cluster.api_version(), ApiVersion::V2);
        assert_eq!(ResourceKind::Namespace.api_version(), ApiVersion::V2);
        assert_eq!(ResourceKind::Topic.api_version(), ApiVersion::V2);
        assert_eq!(ResourceKind::Sink.api_version(), ApiVersion::V3);
    }

    #[test]
    fn test_resource_type_name_lookup() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(ResourceKind::from_type_name("pulsar_function"), None);
    }
}
