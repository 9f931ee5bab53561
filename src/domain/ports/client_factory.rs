//! Client Factory Port
//!
//! Defines the interface for constructing one backend admin client per
//! protocol version. Implementations wrap a concrete HTTP client library.

use crate::domain::entities::ClientConfig;
use crate::domain::error::ClientError;
use async_trait::async_trait;

/// Factory for backend admin clients.
///
/// This is an outbound port called by the configuration entry point once
/// per supported version. Construction may set up TLS or connections but
/// must not issue administrative API calls. Failures are terminal for that
/// version; no retry happens here.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// Client handle produced by this factory. Shared read-only by every
    /// resource operation of a session.
    type Client: Send + Sync + std::fmt::Debug;

    /// Build a client bound to `config.version` and `config.connection`.
    async fn build(&self, config: &ClientConfig) -> Result<Self::Client, ClientError>;
}
