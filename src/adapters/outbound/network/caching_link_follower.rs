use crate::ports::outbound::{DocumentFetcher, LinkFollower};
use crate::release_notes::domain::{Document, DocumentKind};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for decoded documents
///
/// Keying on the kind as well as the URL means a URL requested as two
/// different kinds occupies two slots instead of aliasing one.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    url: String,
    kind: DocumentKind,
}

impl CacheKey {
    fn new(url: &str, kind: DocumentKind) -> Self {
        Self {
            url: url.to_string(),
            kind,
        }
    }
}

/// CachingLinkFollower wraps a DocumentFetcher and adds in-memory memoization.
///
/// This adapter implements the decorator pattern: the graph talks to a
/// `LinkFollower`, and whether a document comes from the cache or the
/// network is invisible to it. The cache is a concurrent map, so calls for
/// different URLs never wait on each other. Two simultaneous misses for
/// the same URL may both reach the network; the later insert wins and both
/// callers get an equivalent document.
///
/// Only successful decodes are stored. Absence is never cached, so a
/// resource that appears later is picked up on the next call.
pub struct CachingLinkFollower<F: DocumentFetcher> {
    inner: F,
    cache: Arc<DashMap<CacheKey, Document>>,
}

impl<F: DocumentFetcher> CachingLinkFollower<F> {
    /// Creates a new caching follower wrapping the given fetcher
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// The wrapped fetcher
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[async_trait]
impl<F: DocumentFetcher> LinkFollower for CachingLinkFollower<F> {
    async fn fetch_document(&self, url: &str, kind: DocumentKind) -> Result<Option<Document>> {
        let key = CacheKey::new(url, kind);

        // The guard must be released before awaiting
        if let Some(cached) = self.cache.get(&key).map(|entry| entry.value().clone()) {
            tracing::debug!(url, %kind, "cache hit");
            return Ok(Some(cached));
        }

        tracing::debug!(url, %kind, "cache miss");
        let Some(document) = self.inner.fetch(url, kind).await? else {
            return Ok(None);
        };

        self.cache.insert(key, document.clone());
        tracing::debug!(url, %kind, "cached");

        Ok(Some(document))
    }

    fn clear(&self) {
        let count = self.cache.len();
        self.cache.clear();
        tracing::debug!(count, "cache cleared");
    }

    fn evict(&self, url: &str) -> bool {
        let removed = DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.cache.remove(&CacheKey::new(url, *kind)).is_some())
            .count();
        tracing::debug!(url, removed, "cache evict");
        removed > 0
    }
}
