use crate::application::navigators::ArchiveNavigator;
use crate::application::read_models::{MonthSummary, YearSummary};
use crate::application::ReleaseNotesGraph;
use crate::release_notes::domain::{CveRecords, ReleaseHistoryIndex};
use crate::shared::security::require_non_empty;
use crate::shared::{GraphError, Result};
use chrono::{Datelike, Months, NaiveDate, Utc};
use futures::{stream, StreamExt, TryStreamExt};
use std::sync::Arc;

/// ArchivesSummary - Views over the release timeline
///
/// Besides the year listing, this is where windowed aggregation lives:
/// disclosure sets from every security month inside a date range,
/// gathered across year indexes.
#[derive(Clone)]
pub struct ArchivesSummary {
    graph: ReleaseNotesGraph,
}

impl ArchivesSummary {
    pub fn new(graph: ReleaseNotesGraph) -> Self {
        Self { graph }
    }

    /// Timeline root
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` if the timeline root does not exist
    pub async fn get_release_history_index(&self) -> Result<Arc<ReleaseHistoryIndex>> {
        self.graph
            .get_release_history_index()
            .await?
            .ok_or_else(|| GraphError::not_found("release history index"))
    }

    /// Every year in document order
    pub async fn get_all_years(&self) -> Result<Vec<YearSummary>> {
        let index = self.get_release_history_index().await?;
        Ok(index
            .embedded
            .as_ref()
            .and_then(|embedded| embedded.years.as_ref())
            .map(|years| years.iter().cloned().map(YearSummary::new).collect())
            .unwrap_or_default())
    }

    pub async fn get_year(&self, year: &str) -> Result<Option<YearSummary>> {
        require_non_empty(year, "year")?;
        Ok(self
            .get_all_years()
            .await?
            .into_iter()
            .find(|y| y.year() == year))
    }

    /// First year in document order
    pub async fn get_latest_year(&self) -> Result<Option<YearSummary>> {
        Ok(self.get_all_years().await?.into_iter().next())
    }

    /// Disclosure sets of every security month from `start_year-start_month`
    /// through `end_year-end_month`, both ends inclusive
    ///
    /// Months come back ordered by year ascending, then by their order in
    /// each year index. Security months without a disclosure set are
    /// skipped. Up to `max_concurrent_fetches` disclosure sets are fetched
    /// at once; the ordering does not depend on which finishes first.
    ///
    /// # Errors
    /// - `GraphError::InvalidArgument` if a month is outside 1-12
    /// - `GraphError::NotFound` if a year in the range has no year index
    /// - `GraphError::InvalidData` if a security month id is not numeric
    pub async fn get_cve_records_in_date_range(
        &self,
        start_year: i32,
        start_month: u32,
        end_year: i32,
        end_month: u32,
    ) -> Result<Vec<Arc<CveRecords>>> {
        validate_month(start_month, "start_month")?;
        validate_month(end_month, "end_month")?;

        tracing::info!(
            start = %format!("{:04}-{:02}", start_year, start_month),
            end = %format!("{:04}-{:02}", end_year, end_month),
            "collecting disclosure sets"
        );

        let mut eligible: Vec<(ArchiveNavigator, MonthSummary)> = Vec::new();
        for year in start_year..=end_year {
            let navigator = self.navigator(year.to_string());
            for month in navigator.get_months_with_security().await? {
                let number = month.month_number()?;
                if year == start_year && number < start_month {
                    continue;
                }
                if year == end_year && number > end_month {
                    continue;
                }
                eligible.push((navigator.clone(), month));
            }
        }

        let fetched: Vec<Option<Arc<CveRecords>>> = stream::iter(eligible.iter())
            .map(|(navigator, month)| navigator.get_cve_records_for_month(month.month()))
            .buffered(self.graph.max_concurrent_fetches())
            .try_collect()
            .await?;

        let records: Vec<Arc<CveRecords>> = fetched.into_iter().flatten().collect();
        tracing::info!(
            months = eligible.len(),
            disclosure_sets = records.len(),
            "collected disclosure sets"
        );

        Ok(records)
    }

    /// Disclosure sets from the last `months_back` months up to the current month
    pub async fn get_recent_cve_records(&self, months_back: u32) -> Result<Vec<Arc<CveRecords>>> {
        self.get_recent_cve_records_from(Utc::now().date_naive(), months_back)
            .await
    }

    /// Disclosure sets from `months_back` months before `today` through `today`'s month
    pub async fn get_recent_cve_records_from(
        &self,
        today: NaiveDate,
        months_back: u32,
    ) -> Result<Vec<Arc<CveRecords>>> {
        let start = today
            .checked_sub_months(Months::new(months_back))
            .ok_or_else(|| GraphError::InvalidArgument {
                name: "months_back",
                reason: format!("{} months before {} is out of range", months_back, today),
            })?;

        self.get_cve_records_in_date_range(start.year(), start.month(), today.year(), today.month())
            .await
    }

    pub fn navigator(&self, year: impl Into<String>) -> ArchiveNavigator {
        self.graph.archive_navigator(year)
    }
}

fn validate_month(month: u32, name: &'static str) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(GraphError::InvalidArgument {
            name,
            reason: format!("{} is not a month number between 1 and 12", month),
        });
    }
    Ok(())
}
