//! Pulsar Admin Client
//!
//! HTTP handle for one admin API version of one cluster. Resource CRUD code
//! issues its calls through the JSON helpers here.

use crate::domain::entities::redacted_url;
use crate::domain::error::AdminError;
use crate::domain::value_objects::ApiVersion;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Configured admin API client bound to a single [`ApiVersion`].
///
/// Immutable after construction. `reqwest::Client` pools connections
/// internally, so one handle serves concurrent resource operations.
#[derive(Clone)]
pub struct PulsarAdminClient {
    version: ApiVersion,
    base_url: Url,
    http: reqwest::Client,
}

impl PulsarAdminClient {
    pub(crate) fn new(version: ApiVersion, base_url: Url, http: reqwest::Client) -> Self {
        Self {
            version,
            base_url,
            http,
        }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Versioned base URL, e.g. `https://broker:8080/admin/v2`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of an admin resource path relative to the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminError> {
        let response = self.http.get(self.url_for(path)).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// PUT `body` as JSON to `path`.
    pub async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), AdminError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.http.put(self.url_for(path)).json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// POST `body` as JSON to `path`.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<(), AdminError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.http.post(self.url_for(path)).json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> Result<(), AdminError> {
        let response = self.http.delete(self.url_for(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Names of the clusters known to the broker.
    pub async fn clusters(&self) -> Result<Vec<String>, AdminError> {
        self.get_json("clusters").await
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AdminError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("admin API error status={} body={}", status, body);
        Err(AdminError::Status { status, body })
    }
}

impl std::fmt::Debug for PulsarAdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulsarAdminClient")
            .field("version", &self.version)
            .field("base_url", &redacted_url(&self.base_url).as_str())
            .finish_non_exhaustive()
    }
}
