use crate::release_notes::domain::{Document, DocumentKind};
use crate::shared::Result;
use async_trait::async_trait;

/// DocumentFetcher port for retrieving one graph document over the network
///
/// This port abstracts the transport used to reach the release-notes
/// graph (HTTP in production, in-memory fixtures in tests).
///
/// # Async Support
/// Implementations must be `Send + Sync` so one fetcher can serve many
/// concurrent call chains.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetches `url` and decodes it as `kind`
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the document
    /// * `kind` - Document kind selecting the decoding rules
    ///
    /// # Returns
    /// `Ok(Some(document))` on success, `Ok(None)` when the remote resource
    /// does not exist
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The server answers with a non-success status other than not-found
    /// - The payload does not decode as `kind`
    async fn fetch(&self, url: &str, kind: DocumentKind) -> Result<Option<Document>>;
}
