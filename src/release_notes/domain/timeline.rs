use super::hal::Links;
use super::patch_index::PatchReleaseVersionIndexEntry;
use super::release_enums::HistoryKind;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Timeline root (`timeline/index.json`): one entry per year, newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseHistoryIndex {
    pub kind: HistoryKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_lts_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_security_month: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary: Option<HashMap<String, String>>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<ReleaseHistoryIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReleaseHistoryIndexEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<HistoryYearEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryYearEntry {
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_releases: Option<Vec<String>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Year index (`timeline/{year}/index.json`) summarising each month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryYearIndex {
    pub kind: HistoryKind,
    pub title: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_security_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_releases: Option<Vec<String>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<HistoryYearIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryYearIndexEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<HistoryMonthSummary>>,
}

/// Lightweight month projection. The `security` flag decides whether a
/// month's disclosure set is worth fetching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMonthSummary {
    /// Two-digit month id, e.g. "02"
    pub month: String,
    pub security: bool,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Month index (`timeline/{year}/{month}/index.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMonthIndex {
    pub kind: HistoryKind,
    pub title: String,
    pub year: String,
    pub month: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    pub security: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_month_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_security_month_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_records: Option<Vec<String>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<HistoryMonthIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryMonthIndexEmbedded {
    /// Patch releases this month, keyed by major version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patches: Option<HashMap<String, PatchReleaseVersionIndexEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosures: Option<Vec<CveRecordSummary>>,
}

/// Simplified CVE record embedded in month indexes. Fix details live in
/// the `cve-json` disclosure set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveRecordSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosure_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_releases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_products: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_packages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_index_months() {
        let json = r#"{
            "kind": "year",
            "title": "2025",
            "year": "2025",
            "latest_security_month": "02",
            "_embedded": {
                "months": [
                    {"month": "02", "security": true, "_links": {"self": {"href": "https://example.test/timeline/2025/02/index.json"}}},
                    {"month": "01", "security": false}
                ]
            }
        }"#;
        let index: HistoryYearIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.kind, HistoryKind::Year);
        let months = index.embedded.unwrap().months.unwrap();
        assert_eq!(months.len(), 2);
        assert!(months[0].security);
        assert!(months[1].links.is_empty());
    }

    #[test]
    fn test_month_index_with_cve_link_and_disclosures() {
        let json = r#"{
            "kind": "month",
            "title": "February 2025",
            "year": "2025",
            "month": "02",
            "date": "2025-02-11T00:00:00+00:00",
            "security": true,
            "cve_records": ["CVE-2025-21172"],
            "_links": {
                "cve-json": {"href": "https://example.test/timeline/2025/02/cve.json"}
            },
            "_embedded": {
                "disclosures": [
                    {"id": "CVE-2025-21172", "title": "Remote code execution", "cvss_score": 7.5, "cvss_severity": "HIGH", "disclosure_date": "2025-02-11"}
                ]
            }
        }"#;
        let index: HistoryMonthIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.month, "02");
        assert!(index.links.contains_key("cve-json"));
        let disclosures = index.embedded.unwrap().disclosures.unwrap();
        assert_eq!(disclosures[0].cvss_score, Some(7.5));
        assert_eq!(
            disclosures[0].disclosure_date,
            NaiveDate::from_ymd_opt(2025, 2, 11)
        );
    }

    #[test]
    fn test_timeline_root() {
        let json = r#"{
            "kind": "timeline",
            "title": "Timeline",
            "_embedded": {"years": [{"year": "2025", "major_releases": ["10.0", "9.0"]}]}
        }"#;
        let index: ReleaseHistoryIndex = serde_json::from_str(json).unwrap();
        let years = index.embedded.unwrap().years.unwrap();
        assert_eq!(years[0].year, "2025");
        assert_eq!(years[0].major_releases.as_ref().unwrap().len(), 2);
    }
}
