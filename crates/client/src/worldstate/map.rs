//! Generic response mapping helpers.
//!
//! The entity types consumed by callers are plain data contracts; each one
//! supplies a parse function `Value -> Result<T, serde_json::Error>` (for
//! serde types, `serde_json::from_value` itself). These helpers hide the
//! fetch/parse/iteration mechanics and implement the best-effort contract:
//! any transport, upstream, or parse failure is logged and collapsed to
//! `None` or an empty vec, never an error or panic.

use serde_json::Value;

use super::{Error, WorldstateClient};

impl WorldstateClient {
    /// Fetch `url` and parse the body as one JSON value.
    async fn fetch_value(&self, url: &str) -> Result<Value, Error> {
        let raw = self.fetch(url).await?;
        serde_json::from_str(&raw).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Fetch `url` and map the response body onto a single `T`.
    ///
    /// Returns `None` if the request or the parse fails.
    pub async fn fetch_one<T, F>(&self, url: &str, parse: F) -> Option<T>
    where
        F: FnOnce(Value) -> Result<T, serde_json::Error>,
    {
        let value = match self.fetch_value(url).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("request for {url} failed: {e}");
                return None;
            }
        };

        match parse(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("failed to parse response for {url}: {e}");
                None
            }
        }
    }

    /// Fetch `url` and map a JSON array response onto a `Vec<T>`, in array
    /// order.
    ///
    /// Returns an empty vec if the request fails or the body is not an
    /// array. An element the parse function rejects is skipped (and logged);
    /// the remaining elements are still returned.
    pub async fn fetch_many<T, F>(&self, url: &str, parse: F) -> Vec<T>
    where
        F: Fn(Value) -> Result<T, serde_json::Error>,
    {
        let value = match self.fetch_value(url).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("request for {url} failed: {e}");
                return Vec::new();
            }
        };

        let Value::Array(items) = value else {
            tracing::warn!("expected a JSON array from {url}");
            return Vec::new();
        };

        let mut parsed = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match parse(item) {
                Ok(element) => parsed.push(element),
                Err(e) => tracing::warn!("skipping element {index} from {url}: {e}"),
            }
        }
        parsed
    }

    /// Fetch `url` and return the unparsed body.
    ///
    /// For the endpoints that answer with a bare JSON string rather than an
    /// object. Returns `None` if the request fails.
    pub async fn fetch_raw(&self, url: &str) -> Option<String> {
        match self.fetch(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("request for {url} failed: {e}");
                None
            }
        }
    }
}
