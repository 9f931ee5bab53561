//! Integration tests for the configuration pass with Wiremock
//!
//! Runs the real client factory against mock admin servers.

use futures::future::join_all;
use pulsar_provider::{
    AdminError, ApiVersion, ConfigError, Descriptions, FactoryOptions, ProviderService,
    ProviderSettings, PulsarAdminClient, PulsarClientFactory, ResourceKind, VersionRegistry,
};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service() -> ProviderService<PulsarAdminClient> {
    let factory = Arc::new(PulsarClientFactory::new(
        FactoryOptions::default().request_timeout(Duration::from_secs(5)),
    ));
    ProviderService::new(factory, Arc::new(Descriptions::standard()))
}

/// Example from the provider documentation: three clients, V2 bound to the endpoint
#[tokio::test]
async fn test_configure_documented_example() {
    let settings = ProviderSettings::new("https://pulsar.example.com:8080").token("");

    let registry = service().configure(&settings).await.unwrap();

    assert_eq!(registry.len(), 3);
    let v2 = registry.lookup(ApiVersion::V2);
    assert_eq!(v2.version(), ApiVersion::V2);
    assert_eq!(
        v2.base_url().as_str(),
        "https://pulsar.example.com:8080/admin/v2"
    );
}

/// Malformed endpoint fails before any client exists
#[tokio::test]
async fn test_configure_rejects_malformed_endpoint() {
    let err = service()
        .configure(&ProviderSettings::new("not a url"))
        .await
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    assert_eq!(err.code(), "ERROR_PULSAR_CONFIG_INVALID_WEB_SERVICE_URL");
}

/// A parseable non-HTTP endpoint configures, then fails on its first request
#[tokio::test]
async fn test_non_http_endpoint_fails_at_request_time() {
    let registry = service()
        .configure(&ProviderSettings::new("pulsar://broker:6650"))
        .await
        .unwrap();

    assert_eq!(registry.len(), 3);
    let err = registry
        .for_resource(ResourceKind::Tenant)
        .clusters()
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Transport(_)), "unexpected: {:?}", err);
}

/// Unreadable trust bundle fails the first version and the whole pass
#[tokio::test]
async fn test_configure_fails_on_missing_trust_bundle() {
    let settings = ProviderSettings::new("https://pulsar.example.com:8443")
        .tls_trust_certs_file_path("/nonexistent/pulsar-ca.pem");

    let err = service().configure(&settings).await.unwrap_err();

    match err {
        ConfigError::ClientConstructionFailed { version, .. } => {
            assert_eq!(version, ApiVersion::V1);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Valid trust bundle on disk is accepted for every version
#[tokio::test]
async fn test_configure_with_trust_bundle() {
    let rcgen::CertifiedKey { cert, .. } =
        rcgen::generate_simple_self_signed(vec!["pulsar.example.com".to_string()]).unwrap();
    let mut bundle = tempfile::NamedTempFile::new().unwrap();
    write!(bundle, "{}", cert.pem()).unwrap();

    let settings = ProviderSettings::new("https://pulsar.example.com:8443")
        .tls_trust_certs_file_path(bundle.path().to_str().unwrap());

    let registry = service().configure(&settings).await.unwrap();
    assert_eq!(registry.len(), 3);
}

/// Every version's client reaches its own path prefix with the same credentials
#[tokio::test]
async fn test_clients_hit_versioned_paths_with_token() {
    let mock_server = MockServer::start().await;

    for version in ApiVersion::ALL {
        Mock::given(method("GET"))
            .and(path(format!("{}/clusters", version.path_prefix())))
            .and(header("authorization", "Bearer admin-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([version.as_str()])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let settings = ProviderSettings::new(mock_server.uri()).token("admin-token");
    let registry = service().configure(&settings).await.unwrap();

    for (version, client) in registry.iter() {
        let clusters = client.clusters().await.unwrap();
        assert_eq!(clusters, vec![version.as_str().to_string()]);
    }
}

/// Configuration performs no admin API calls
#[tokio::test]
async fn test_configure_issues_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let registry = service()
        .configure(&ProviderSettings::new(mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(registry.len(), 3);
}

/// Many resource operations read the registry concurrently
#[tokio::test]
async fn test_concurrent_resource_operations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/v2/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["standalone"])))
        .expect(16)
        .mount(&mock_server)
        .await;

    let registry: VersionRegistry<PulsarAdminClient> = service()
        .configure(&ProviderSettings::new(mock_server.uri()))
        .await
        .unwrap();

    let tasks = (0..16).map(|_| {
        let registry = registry.clone();
        tokio::spawn(async move {
            registry
                .for_resource(ResourceKind::Tenant)
                .clusters()
                .await
                .unwrap()
        })
    });

    for result in join_all(tasks).await {
        assert_eq!(result.unwrap(), vec!["standalone".to_string()]);
    }
}

/// Host settings object goes through the same pass
#[tokio::test]
async fn test_configure_json_from_host() {
    let registry = service()
        .with_host_version(Some("1.7.5"))
        .configure_json_with(
            serde_json::json!({
                "endpoint": "http://localhost:8080",
                "tls_allow_insecure_connection": true
            }),
            |_| None,
        )
        .await
        .unwrap();

    assert_eq!(
        registry.for_resource(ResourceKind::Sink).base_url().as_str(),
        "http://localhost:8080/admin/v3"
    );
}
