use crate::release_notes::domain::{Document, DocumentKind};
use crate::shared::Result;
use async_trait::async_trait;

/// LinkFollower port used by the graph to resolve documents
///
/// Absence is data here, exactly as in [`DocumentFetcher`]: a missing
/// resource is `Ok(None)` and never an error.
///
/// [`DocumentFetcher`]: super::DocumentFetcher
#[async_trait]
pub trait LinkFollower: Send + Sync {
    /// Resolves `url` as a document of `kind`
    async fn fetch_document(&self, url: &str, kind: DocumentKind) -> Result<Option<Document>>;

    /// Drops every remembered document. Followers without a cache have nothing to drop.
    fn clear(&self) {}

    /// Forgets the documents remembered for `url`
    ///
    /// # Returns
    /// `true` if anything was removed
    fn evict(&self, _url: &str) -> bool {
        false
    }
}
