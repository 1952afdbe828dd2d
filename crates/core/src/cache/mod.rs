//! In-memory cache for upstream response bodies.
//!
//! The worldstate API hands out an `ETag` with every response, so a client
//! that remembers the last body per URL can revalidate with `If-None-Match`
//! and serve 304s from memory instead of re-downloading unchanged payloads.
//!
//! The cache is URL-keyed and lives as long as the client that owns it.
//! Entries are created on the first 200 response for a URL and replaced
//! wholesale on every later one; nothing is ever evicted.

use dashmap::DashMap;

/// Last known state of one URL: the response body and the ETag it came with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// ETag from the response, if the server sent one.
    pub etag: Option<String>,
    /// The response body as received.
    pub body: String,
}

/// URL-keyed store of [`CacheEntry`] values.
///
/// Safe for concurrent readers and writers; concurrent updates to the same
/// URL resolve to one complete entry (last writer wins), never a torn one.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached entry for `url`, if any.
    pub fn get(&self, url: &str) -> Option<CacheEntry> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    /// Store the latest body and ETag for `url`.
    ///
    /// Replaces both fields of an existing entry, or creates the entry on
    /// first sight of the URL.
    pub fn update(&self, url: &str, body: &str, etag: Option<String>) {
        match self.entries.get_mut(url) {
            Some(mut entry) => {
                entry.body = body.to_string();
                entry.etag = etag;
            }
            None => {
                tracing::trace!("caching first response for {url}");
                self.entries.insert(url.to_string(), CacheEntry { etag, body: body.to_string() });
            }
        }
    }

    /// Number of URLs currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
