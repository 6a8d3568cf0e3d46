use crate::application::read_models::MonthSummary;
use crate::application::ReleaseNotesGraph;
use crate::release_notes::domain::{CveRecords, HistoryMonthIndex, HistoryYearIndex, LinkRelations};
use crate::shared::security::require_non_empty;
use crate::shared::{GraphError, Result};
use std::sync::Arc;

/// ArchiveNavigator - Lazy view over one year of the release timeline
///
/// A missing year index is escalated to `GraphError::NotFound`. Missing
/// secondary documents (a month index, a month's disclosure set) stay
/// `None`.
#[derive(Clone)]
pub struct ArchiveNavigator {
    graph: ReleaseNotesGraph,
    year: String,
}

impl ArchiveNavigator {
    pub fn new(graph: ReleaseNotesGraph, year: impl Into<String>) -> Self {
        Self {
            graph,
            year: year.into(),
        }
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Backing year index
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if the index does not exist
    pub async fn get_year_index(&self) -> Result<Arc<HistoryYearIndex>> {
        self.graph
            .get_year_index(&self.year)
            .await?
            .ok_or_else(|| GraphError::not_found(format!("year index for {}", self.year)))
    }

    /// Every month embedded in the year index, in document order
    pub async fn get_all_months(&self) -> Result<Vec<MonthSummary>> {
        let index = self.get_year_index().await?;
        Ok(index
            .embedded
            .as_ref()
            .and_then(|embedded| embedded.months.as_ref())
            .map(|months| {
                months
                    .iter()
                    .cloned()
                    .map(|m| MonthSummary::new(m, self.year.as_str()))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// First month in document order
    pub async fn get_latest_month(&self) -> Result<Option<MonthSummary>> {
        Ok(self.get_all_months().await?.into_iter().next())
    }

    pub async fn get_month(&self, month: &str) -> Result<Option<MonthSummary>> {
        require_non_empty(month, "month")?;
        Ok(self
            .get_all_months()
            .await?
            .into_iter()
            .find(|m| m.month() == month))
    }

    pub async fn get_months_with_security(&self) -> Result<Vec<MonthSummary>> {
        Ok(self
            .get_all_months()
            .await?
            .into_iter()
            .filter(MonthSummary::security)
            .collect())
    }

    pub async fn get_month_index(&self, month: &str) -> Result<Option<Arc<HistoryMonthIndex>>> {
        self.graph.get_month_index(&self.year, month).await
    }

    /// Disclosure set linked from the month index through `cve-json`
    ///
    /// # Returns
    /// `None` when the month index is missing or links no disclosure set
    pub async fn get_cve_records_for_month(&self, month: &str) -> Result<Option<Arc<CveRecords>>> {
        require_non_empty(month, "month")?;

        let Some(index) = self.get_month_index(month).await? else {
            return Ok(None);
        };

        match index.links.get(LinkRelations::CVE_JSON) {
            Some(link) => self.graph.follow_link::<CveRecords>(link).await,
            None => {
                tracing::debug!(year = %self.year, month, "month has no disclosure link");
                Ok(None)
            }
        }
    }
}
