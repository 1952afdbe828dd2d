//! Warframe worldstate API client.
//!
//! Provides a client for the worldstate REST API with conditional requests
//! and in-memory response caching.
//!
//! ### Request model
//!
//! - **Transport**: plain HTTPS GET, one request per call, no retries.
//! - **Caching**: `If-None-Match`/`ETag` revalidation against a per-URL
//!   cache owned by the client; a 304 is served from memory.
//! - **Failure model**: non-200/304 statuses and transport faults surface
//!   as typed errors from [`WorldstateClient::fetch`]; the mapping helpers
//!   (`fetch_one`, `fetch_many`, `fetch_raw`) log and collapse them to
//!   absent/empty results so upstream downtime never propagates as a panic
//!   or error into consumers.

pub mod error;
mod map;

pub use error::Error;

use std::sync::Arc;

use reqwest::{StatusCode, header};
use url::Url;
use worldstate_core::{ClientConfig, ResponseCache};

/// Worldstate API client.
///
/// Owns the HTTP connection pool and the response cache; construct one and
/// share it (clones are cheap and share the cache) wherever coherent
/// caching is wanted.
#[derive(Debug, Clone)]
pub struct WorldstateClient {
    http: reqwest::Client,
    cache: Arc<ResponseCache>,
    config: ClientConfig,
}

impl WorldstateClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?;

        Ok(Self { http, cache: Arc::new(ResponseCache::new()), config })
    }

    /// Create a new client from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::load()?)
    }

    /// Fetch the current body for `url`, from network or cache.
    ///
    /// Sends a conditional GET when a cached ETag exists for the URL. A 200
    /// response replaces the cache entry and is returned; a 304 returns the
    /// cached body unchanged. Any other status is an [`Error::Upstream`]
    /// and leaves the cache untouched.
    pub async fn fetch(&self, url: &str) -> Result<String, Error> {
        let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        let cached = self.cache.get(url.as_str());

        let mut request = self.http.get(url.clone());
        if let Some(entry) = &cached
            && let Some(etag) = &entry.etag
        {
            request = request.header(header::IF_NONE_MATCH, etag.as_str());
        }

        let response = request.send().await?;
        let status = response.status();

        match status {
            StatusCode::NOT_MODIFIED => {
                // A 304 is only meaningful as an answer to our own
                // If-None-Match; without a cached body there is nothing to
                // serve.
                let Some(entry) = cached else {
                    return Err(Error::UnexpectedNotModified(url.to_string()));
                };
                tracing::debug!("using cached response for {url}");
                Ok(entry.body)
            }
            StatusCode::OK => {
                let etag = response
                    .headers()
                    .get(header::ETAG)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                let body = response.text().await?;
                self.cache.update(url.as_str(), &body, etag);
                tracing::debug!("received response for {url}");
                Ok(body)
            }
            _ => {
                let body = response.text().await?;
                Err(Error::Upstream { status: status.as_u16(), body })
            }
        }
    }

    /// Get reference to the response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_default_config() {
        let client = WorldstateClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig { user_agent: String::new(), ..Default::default() };
        assert!(matches!(WorldstateClient::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_clones_share_the_cache() {
        let client = WorldstateClient::new(ClientConfig::default()).unwrap();
        let clone = client.clone();

        client.cache().update("u", "body", None);
        assert_eq!(clone.cache().get("u").unwrap().body, "body");
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let client = WorldstateClient::new(ClientConfig::default()).unwrap();
        let result = client.fetch("not a url").await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
