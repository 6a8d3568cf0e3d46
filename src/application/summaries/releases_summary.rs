use crate::application::navigators::ReleaseNavigator;
use crate::application::read_models::ReleaseSummary;
use crate::application::ReleaseNotesGraph;
use crate::release_notes::domain::{MajorReleaseVersionIndex, ReleaseType, SupportPhase};
use crate::shared::security::require_non_empty;
use crate::shared::{GraphError, Result};
use std::sync::Arc;

/// ReleasesSummary - Filtered views over every major release
///
/// Every query is a projection of the root index, which is fetched once
/// and then served from the graph's cache. "Latest" means first in
/// document order.
#[derive(Clone)]
pub struct ReleasesSummary {
    graph: ReleaseNotesGraph,
}

impl ReleasesSummary {
    pub fn new(graph: ReleaseNotesGraph) -> Self {
        Self { graph }
    }

    /// Root index
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if the root index does not exist
    pub async fn get_major_release_index(&self) -> Result<Arc<MajorReleaseVersionIndex>> {
        self.graph
            .get_major_release_index()
            .await?
            .ok_or_else(|| GraphError::not_found("major release index"))
    }

    pub async fn get_all_releases(&self) -> Result<Vec<ReleaseSummary>> {
        let index = self.get_major_release_index().await?;
        Ok(index
            .embedded
            .as_ref()
            .and_then(|embedded| embedded.releases.as_ref())
            .map(|releases| releases.iter().cloned().map(ReleaseSummary::new).collect())
            .unwrap_or_default())
    }

    pub async fn get_supported_releases(&self) -> Result<Vec<ReleaseSummary>> {
        self.filtered(ReleaseSummary::is_supported).await
    }

    pub async fn get_releases_by_phase(&self, phase: SupportPhase) -> Result<Vec<ReleaseSummary>> {
        self.filtered(|r| r.phase() == Some(phase)).await
    }

    pub async fn get_releases_by_type(
        &self,
        release_type: ReleaseType,
    ) -> Result<Vec<ReleaseSummary>> {
        self.filtered(|r| r.release_type() == Some(release_type)).await
    }

    pub async fn get_latest_release(&self) -> Result<Option<ReleaseSummary>> {
        Ok(self.get_all_releases().await?.into_iter().next())
    }

    pub async fn get_latest_lts_release(&self) -> Result<Option<ReleaseSummary>> {
        self.first(ReleaseSummary::is_lts).await
    }

    pub async fn get_latest_sts_release(&self) -> Result<Option<ReleaseSummary>> {
        self.first(ReleaseSummary::is_sts).await
    }

    pub async fn get_latest_supported_release(&self) -> Result<Option<ReleaseSummary>> {
        self.first(ReleaseSummary::is_supported).await
    }

    /// Looks a major version up by its exact version string
    pub async fn get_release(&self, version: &str) -> Result<Option<ReleaseSummary>> {
        require_non_empty(version, "version")?;
        self.first(|r| r.version() == version).await
    }

    /// `false` for versions the root index does not list
    pub async fn is_supported(&self, version: &str) -> Result<bool> {
        Ok(self
            .get_release(version)
            .await?
            .is_some_and(|r| r.is_supported()))
    }

    pub fn navigator(&self, version: impl Into<String>) -> ReleaseNavigator {
        self.graph.release_navigator(version)
    }

    async fn filtered<P>(&self, predicate: P) -> Result<Vec<ReleaseSummary>>
    where
        P: Fn(&ReleaseSummary) -> bool,
    {
        Ok(self
            .get_all_releases()
            .await?
            .into_iter()
            .filter(|r| predicate(r))
            .collect())
    }

    async fn first<P>(&self, predicate: P) -> Result<Option<ReleaseSummary>>
    where
        P: Fn(&ReleaseSummary) -> bool,
    {
        Ok(self
            .get_all_releases()
            .await?
            .into_iter()
            .find(|r| predicate(r)))
    }
}
