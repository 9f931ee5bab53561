//! Version Registry
//!
//! The complete mapping from admin API version to constructed client,
//! shared read-only by every resource operation of a session.

use crate::domain::value_objects::{ApiVersion, ResourceKind};
use std::future::Future;
use std::sync::Arc;

/// Total, immutable mapping from [`ApiVersion`] to client.
///
/// Clients are stored in a fixed array indexed by version, so every
/// version has exactly one entry and lookups cannot miss. The only way to
/// obtain a registry is [`VersionRegistry::try_build`], which either
/// yields every client or none. Cloning shares the same clients.
pub struct VersionRegistry<C> {
    clients: [Arc<C>; ApiVersion::COUNT],
}

impl<C> VersionRegistry<C> {
    /// Build one client per version, all or nothing.
    ///
    /// Versions are built in [`ApiVersion::ALL`] order. The first error
    /// aborts the build: later versions are never attempted and the
    /// clients built so far are dropped.
    pub async fn try_build<F, Fut, E>(mut build: F) -> Result<Self, E>
    where
        F: FnMut(ApiVersion) -> Fut,
        Fut: Future<Output = Result<C, E>>,
    {
        let [v1, v2, v3] = ApiVersion::ALL;

        let clients = [
            Arc::new(build(v1).await?),
            Arc::new(build(v2).await?),
            Arc::new(build(v3).await?),
        ];

        Ok(Self { clients })
    }

    /// Client for `version`.
    pub fn lookup(&self, version: ApiVersion) -> &C {
        &self.clients[version.index()]
    }

    /// Shared handle to the client for `version`, for moving into tasks.
    pub fn shared(&self, version: ApiVersion) -> Arc<C> {
        Arc::clone(&self.clients[version.index()])
    }

    /// Client a resource kind's CRUD calls go through.
    pub fn for_resource(&self, kind: ResourceKind) -> &C {
        self.lookup(kind.api_version())
    }

    /// Number of entries; always the number of supported versions.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Always false. Present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Entries in version order.
    pub fn iter(&self) -> impl Iterator<Item = (ApiVersion, &C)> + '_ {
        ApiVersion::ALL
            .into_iter()
            .map(move |version| (version, self.lookup(version)))
    }
}

impl<C> Clone for VersionRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            clients: self.clients.clone(),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for VersionRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
