use crate::release_notes::domain::{HistoryYearEntry, Links};

/// View of one year listed in the timeline root
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    entry: HistoryYearEntry,
}

impl YearSummary {
    pub fn new(entry: HistoryYearEntry) -> Self {
        Self { entry }
    }

    pub fn year(&self) -> &str {
        &self.entry.year
    }

    pub fn description(&self) -> Option<&str> {
        self.entry.description.as_deref()
    }

    /// Major versions that shipped a release during the year
    pub fn major_releases(&self) -> &[String] {
        self.entry.major_releases.as_deref().unwrap_or_default()
    }

    pub fn major_release_count(&self) -> usize {
        self.major_releases().len()
    }

    pub fn links(&self) -> &Links {
        &self.entry.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_release_count() {
        let entry: HistoryYearEntry = serde_json::from_value(serde_json::json!({
            "year": "2024",
            "major_releases": ["9.0", "8.0", "6.0"]
        }))
        .unwrap();
        let year = YearSummary::new(entry);
        assert_eq!(year.year(), "2024");
        assert_eq!(year.major_release_count(), 3);

        let bare: HistoryYearEntry =
            serde_json::from_value(serde_json::json!({"year": "2017"})).unwrap();
        assert_eq!(YearSummary::new(bare).major_release_count(), 0);
    }
}
