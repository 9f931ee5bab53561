//! pulsar-provider - configuration check for the Pulsar provider
//!
//! This is the composition root that wires together all the components,
//! runs one configuration pass from the environment, and reports the
//! resolved admin clients.

use pulsar_provider::{
    load_config, redacted_url, ApiVersion, Descriptions, FactoryOptions, ProviderService,
    PulsarClientFactory, ResourceKind,
};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    // ===== COMPOSITION ROOT =====

    let descriptions = Arc::new(Descriptions::standard());
    let factory = Arc::new(PulsarClientFactory::new(FactoryOptions::default()));

    let service = ProviderService::new(factory, descriptions)
        .with_host_version(cfg.host_version.as_deref());

    tracing::info!("starting pulsar-provider user_agent={}", service.user_agent());

    let registry = match service.configure(&cfg.settings).await {
        Ok(registry) => registry,
        Err(e) => {
            let code = e.code();
            let err = anyhow::Error::new(e);
            tracing::error!("configuration failed code={}: {:#}", code, err);
            return Err(err);
        }
    };

    for (version, client) in registry.iter() {
        tracing::info!(
            "admin client {} -> {}",
            version,
            redacted_url(client.base_url())
        );
    }

    if cfg.probe {
        let client = registry.for_resource(ResourceKind::Cluster);
        match client.clusters().await {
            Ok(clusters) => tracing::info!(
                "probe ok version={} clusters={:?}",
                client.version(),
                clusters
            ),
            Err(e) => tracing::warn!("probe failed version={}: {}", client.version(), e),
        }
    }

    tracing::info!(
        "provider ready versions={:?}",
        ApiVersion::ALL.map(|v| v.as_str())
    );

    Ok(())
}
