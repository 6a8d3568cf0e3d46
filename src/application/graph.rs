use super::navigators::{ArchiveNavigator, ReleaseNavigator};
use super::summaries::{ArchivesSummary, ReleasesSummary};
use crate::adapters::outbound::network::{CachingLinkFollower, HttpDocumentFetcher};
use crate::config::{normalize_base_url, GraphConfig, DEFAULT_MAX_CONCURRENT_FETCHES};
use crate::ports::outbound::LinkFollower;
use crate::release_notes::domain::{
    GraphDocument, HalLink, HistoryMonthIndex, HistoryYearIndex, MajorReleaseVersionIndex,
    PatchReleaseVersionIndex, ReleaseHistoryIndex, ReleaseManifest,
};
use crate::shared::security::{validate_href, validate_path_key};
use crate::shared::{GraphError, Result};
use std::sync::Arc;

/// ReleaseNotesGraph - Entry point into the release-notes document graph
///
/// Holds the graph's base URL and the link follower every fetch goes
/// through. The graph has no cache of its own; repeated calls are cheap
/// only because the follower (normally a [`CachingLinkFollower`]) memoizes.
///
/// Cloning is cheap and clones share the same follower, which is how
/// navigators and summaries reuse documents fetched elsewhere.
#[derive(Clone)]
pub struct ReleaseNotesGraph {
    follower: Arc<dyn LinkFollower>,
    base_url: String,
    max_concurrent_fetches: usize,
}

impl ReleaseNotesGraph {
    /// Creates a graph rooted at `base_url` that resolves documents through `follower`
    ///
    /// # Arguments
    /// * `follower` - Link follower used for every fetch
    /// * `base_url` - Root of the graph; a trailing `/` is added when missing
    pub fn new(follower: Arc<dyn LinkFollower>, base_url: impl AsRef<str>) -> Self {
        Self {
            follower,
            base_url: normalize_base_url(base_url.as_ref()),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }

    /// Builds an HTTP-backed graph with a caching follower from `config`
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        let fetcher = HttpDocumentFetcher::from_config(config)?;
        let follower = Arc::new(CachingLinkFollower::new(fetcher));
        Ok(Self::new(follower, &config.base_url)
            .with_max_concurrent_fetches(config.max_concurrent_fetches))
    }

    /// HTTP-backed graph with default settings rooted at `base_url`
    pub fn with_http(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&GraphConfig::with_base_url(base_url))
    }

    /// Bounds disclosure-set fetches in flight during windowed aggregation
    pub fn with_max_concurrent_fetches(mut self, max_concurrent_fetches: usize) -> Self {
        self.max_concurrent_fetches = max_concurrent_fetches.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    /// Drops every document remembered by the follower
    pub fn clear_cache(&self) {
        self.follower.clear();
    }

    /// Forgets the documents remembered for `url`
    pub fn evict(&self, url: &str) -> bool {
        self.follower.evict(url)
    }

    /// Root index listing every major version (`index.json`)
    pub async fn get_major_release_index(&self) -> Result<Option<Arc<MajorReleaseVersionIndex>>> {
        let url = format!("{}index.json", self.base_url);
        self.fetch(&url).await
    }

    /// Major-version index listing the patches of `version` (`{version}/index.json`)
    pub async fn get_patch_release_index(
        &self,
        version: &str,
    ) -> Result<Option<Arc<PatchReleaseVersionIndex>>> {
        let url = self.join(&[("version", version)], "index.json")?;
        self.fetch(&url).await
    }

    /// Release manifest of `version` (`{version}/manifest.json`)
    pub async fn get_manifest(&self, version: &str) -> Result<Option<Arc<ReleaseManifest>>> {
        let url = self.join(&[("version", version)], "manifest.json")?;
        self.fetch(&url).await
    }

    /// Timeline root listing every year (`timeline/index.json`)
    pub async fn get_release_history_index(&self) -> Result<Option<Arc<ReleaseHistoryIndex>>> {
        let url = format!("{}timeline/index.json", self.base_url);
        self.fetch(&url).await
    }

    /// Year index (`timeline/{year}/index.json`)
    pub async fn get_year_index(&self, year: &str) -> Result<Option<Arc<HistoryYearIndex>>> {
        let url = self.join(&[("timeline", "timeline"), ("year", year)], "index.json")?;
        self.fetch(&url).await
    }

    /// Month index (`timeline/{year}/{month}/index.json`)
    pub async fn get_month_index(
        &self,
        year: &str,
        month: &str,
    ) -> Result<Option<Arc<HistoryMonthIndex>>> {
        let url = self.join(
            &[("timeline", "timeline"), ("year", year), ("month", month)],
            "index.json",
        )?;
        self.fetch(&url).await
    }

    /// Follows `link` and decodes the target as `T`
    ///
    /// Templated links are not expanded here; callers expand them first.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` for an empty or templated href
    pub async fn follow_link<T: GraphDocument>(&self, link: &HalLink) -> Result<Option<Arc<T>>> {
        if link.is_templated() {
            return Err(GraphError::InvalidArgument {
                name: "href",
                reason: format!("'{}' is templated and must be expanded first", link.href),
            });
        }
        self.fetch(&link.href).await
    }

    /// Fetches `url` through the follower as a `T`
    ///
    /// # Returns
    /// `Ok(None)` when the document does not exist
    ///
    /// # Errors
    /// Returns `GraphError::KindMismatch` if the follower answers with
    /// another document kind, plus any fault from the follower itself
    pub async fn fetch<T: GraphDocument>(&self, url: &str) -> Result<Option<Arc<T>>> {
        validate_href(url)?;

        let Some(document) = self.follower.fetch_document(url, T::KIND).await? else {
            return Ok(None);
        };

        let actual = document.kind();
        T::from_document(document)
            .map(Some)
            .ok_or_else(|| GraphError::KindMismatch {
                url: url.to_string(),
                expected: T::KIND,
                actual,
            })
    }

    /// Summary over every major release. Nothing is fetched until it is queried.
    pub fn releases_summary(&self) -> ReleasesSummary {
        ReleasesSummary::new(self.clone())
    }

    pub fn release_navigator(&self, version: impl Into<String>) -> ReleaseNavigator {
        ReleaseNavigator::new(self.clone(), version)
    }

    /// Summary over the release timeline. Nothing is fetched until it is queried.
    pub fn archives_summary(&self) -> ArchivesSummary {
        ArchivesSummary::new(self.clone())
    }

    pub fn archive_navigator(&self, year: impl Into<String>) -> ArchiveNavigator {
        ArchiveNavigator::new(self.clone(), year)
    }

    /// Joins validated, URL-encoded path keys onto the base URL
    fn join(&self, keys: &[(&'static str, &str)], file: &str) -> Result<String> {
        let mut url = self.base_url.clone();
        for &(name, key) in keys {
            validate_path_key(key, name)?;
            url.push_str(&urlencoding::encode(key));
            url.push('/');
        }
        url.push_str(file);
        Ok(url)
    }
}
