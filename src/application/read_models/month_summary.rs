use crate::release_notes::domain::{HistoryMonthSummary, Links};
use crate::shared::{GraphError, Result};

/// View of one month listed in a year index, tagged with its year
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    year: String,
    entry: HistoryMonthSummary,
}

impl MonthSummary {
    pub fn new(entry: HistoryMonthSummary, year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            entry,
        }
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Two-digit month id as published, e.g. "02"
    pub fn month(&self) -> &str {
        &self.entry.month
    }

    /// `"YYYY-MM"`
    pub fn year_month(&self) -> String {
        format!("{}-{}", self.year, self.entry.month)
    }

    /// True when the month carried a security release
    pub fn security(&self) -> bool {
        self.entry.security
    }

    /// Numeric month value
    ///
    /// # Errors
    /// Returns `GraphError::InvalidData` if the published month id is not a number
    pub fn month_number(&self) -> Result<u32> {
        self.entry
            .month
            .trim()
            .parse()
            .map_err(|_| GraphError::InvalidData {
                details: format!(
                    "month id '{}' in year {} is not numeric",
                    self.entry.month, self.year
                ),
            })
    }

    pub fn links(&self) -> &Links {
        &self.entry.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(id: &str, security: bool) -> MonthSummary {
        let entry: HistoryMonthSummary =
            serde_json::from_value(serde_json::json!({"month": id, "security": security})).unwrap();
        MonthSummary::new(entry, "2025")
    }

    #[test]
    fn test_year_month() {
        let summary = month("02", true);
        assert_eq!(summary.year_month(), "2025-02");
        assert_eq!(summary.month_number().unwrap(), 2);
        assert!(summary.security());
    }

    #[test]
    fn test_non_numeric_month_is_invalid_data() {
        let err = month("feb", false).month_number().unwrap_err();
        assert!(matches!(err, GraphError::InvalidData { .. }));
    }
}
