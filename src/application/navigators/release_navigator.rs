use crate::application::read_models::PatchSummary;
use crate::application::ReleaseNotesGraph;
use crate::release_notes::domain::{
    LinkRelations, PatchDetailIndex, PatchReleaseVersionIndex, ReleaseManifest,
};
use crate::shared::security::require_non_empty;
use crate::shared::{GraphError, Result};
use std::sync::Arc;

/// ReleaseNavigator - Lazy view over one major version
///
/// Navigators are only handed out for versions the caller believes exist,
/// so a missing major-version index or manifest is reported as
/// `GraphError::NotFound` rather than as absence.
#[derive(Clone)]
pub struct ReleaseNavigator {
    graph: ReleaseNotesGraph,
    version: String,
}

impl ReleaseNavigator {
    pub fn new(graph: ReleaseNotesGraph, version: impl Into<String>) -> Self {
        Self {
            graph,
            version: version.into(),
        }
    }

    /// Major version this navigator is bound to, e.g. "9.0"
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Backing major-version index
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if the index does not exist
    pub async fn get_patch_release_index(&self) -> Result<Arc<PatchReleaseVersionIndex>> {
        self.graph
            .get_patch_release_index(&self.version)
            .await?
            .ok_or_else(|| {
                GraphError::not_found(format!("patch index for version {}", self.version))
            })
    }

    /// Release manifest for the version
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if the manifest does not exist
    pub async fn get_manifest(&self) -> Result<Arc<ReleaseManifest>> {
        self.graph
            .get_manifest(&self.version)
            .await?
            .ok_or_else(|| GraphError::not_found(format!("manifest for version {}", self.version)))
    }

    /// Every patch in document order (newest first as published)
    pub async fn get_all_patches(&self) -> Result<Vec<PatchSummary>> {
        let index = self.get_patch_release_index().await?;
        Ok(index
            .embedded
            .as_ref()
            .map(|embedded| {
                embedded
                    .patches
                    .iter()
                    .cloned()
                    .map(PatchSummary::new)
                    .collect()
            })
            .unwrap_or_default())
    }

    /// First patch in document order; no sorting is applied
    pub async fn get_latest_patch(&self) -> Result<Option<PatchSummary>> {
        Ok(self.get_all_patches().await?.into_iter().next())
    }

    pub async fn get_patch(&self, patch_version: &str) -> Result<Option<PatchSummary>> {
        require_non_empty(patch_version, "patch_version")?;
        Ok(self
            .get_all_patches()
            .await?
            .into_iter()
            .find(|p| p.version() == patch_version))
    }

    pub async fn get_security_patches(&self) -> Result<Vec<PatchSummary>> {
        Ok(self
            .get_all_patches()
            .await?
            .into_iter()
            .filter(PatchSummary::is_security_update)
            .collect())
    }

    pub async fn has_security_updates(&self) -> Result<bool> {
        Ok(self
            .get_all_patches()
            .await?
            .iter()
            .any(PatchSummary::is_security_update))
    }

    /// Follows a patch's `self` link to its detail document
    ///
    /// # Returns
    /// `None` if the patch is not listed, has no `self` link, or the
    /// detail document does not exist
    pub async fn get_patch_detail(
        &self,
        patch_version: &str,
    ) -> Result<Option<Arc<PatchDetailIndex>>> {
        let Some(patch) = self.get_patch(patch_version).await? else {
            return Ok(None);
        };

        match patch.links().get(LinkRelations::SELF) {
            Some(link) => self.graph.follow_link::<PatchDetailIndex>(link).await,
            None => {
                tracing::debug!(patch = patch_version, "patch has no self link");
                Ok(None)
            }
        }
    }
}
