use crate::release_notes::domain::{Cve, CveRecords};
use crate::shared::security::require_non_empty;
use crate::shared::Result;
use std::borrow::Borrow;
use std::collections::HashSet;

/// Platform name that marks a disclosure as affecting every platform
pub const ALL_PLATFORMS: &str = "all";

/// Severity labels counted as "high severity"
const HIGH_SEVERITIES: [&str; 2] = ["Critical", "High"];

/// CveFilter - Set operations over already-fetched disclosure sets
///
/// All operations are pure: nothing is fetched, and input order is kept.
/// String comparisons on platforms and severities are case-insensitive.
pub struct CveFilter;

impl CveFilter {
    /// Returns the disclosures affecting a specific major release
    ///
    /// Collects every CVE id referenced by a product entry whose `release`
    /// equals `version`, across all supplied sets, then returns the matching
    /// disclosures from across all sets. A CVE listed in several sets is
    /// returned once; the first occurrence wins.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if `version` is empty
    pub fn filter_by_version<'a, R>(records: &'a [R], version: &str) -> Result<Vec<&'a Cve>>
    where
        R: Borrow<CveRecords>,
    {
        require_non_empty(version, "version")?;

        let affected: HashSet<&str> = records
            .iter()
            .flat_map(|r| r.borrow().products.iter())
            .filter(|p| p.release == version)
            .map(|p| p.cve_id.as_str())
            .collect();

        let mut seen = HashSet::new();
        Ok(records
            .iter()
            .flat_map(|r| r.borrow().disclosures.iter())
            .filter(|c| affected.contains(c.id.as_str()))
            .filter(|c| seen.insert(c.id.as_str()))
            .collect())
    }

    /// Returns the disclosures listing `platform`
    ///
    /// When `include_all` is set, disclosures whose platforms contain the
    /// `"all"` wildcard match as well.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if `platform` is empty
    pub fn filter_by_platform<'a, I>(
        cves: I,
        platform: &str,
        include_all: bool,
    ) -> Result<Vec<&'a Cve>>
    where
        I: IntoIterator<Item = &'a Cve>,
    {
        require_non_empty(platform, "platform")?;

        Ok(cves
            .into_iter()
            .filter(|c| {
                has_platform(c, platform) || (include_all && has_platform(c, ALL_PLATFORMS))
            })
            .collect())
    }

    /// Returns the disclosures listing any of `platforms`
    pub fn filter_by_platforms<'a, I, S>(
        cves: I,
        platforms: &[S],
        include_all: bool,
    ) -> Vec<&'a Cve>
    where
        I: IntoIterator<Item = &'a Cve>,
        S: AsRef<str>,
    {
        let wanted: HashSet<String> = platforms
            .iter()
            .map(|p| p.as_ref().to_ascii_lowercase())
            .collect();

        cves.into_iter()
            .filter(|c| {
                c.platforms
                    .iter()
                    .any(|p| wanted.contains(&p.to_ascii_lowercase()))
                    || (include_all && has_platform(c, ALL_PLATFORMS))
            })
            .collect()
    }

    /// Returns the disclosures whose CVSS severity label equals `severity`
    ///
    /// # Errors
    /// Returns `GraphError::InvalidArgument` if `severity` is empty
    pub fn filter_by_severity<'a, I>(cves: I, severity: &str) -> Result<Vec<&'a Cve>>
    where
        I: IntoIterator<Item = &'a Cve>,
    {
        require_non_empty(severity, "severity")?;

        Ok(cves
            .into_iter()
            .filter(|c| c.cvss.severity.eq_ignore_ascii_case(severity))
            .collect())
    }

    /// Returns the Critical and High severity disclosures
    pub fn filter_high_severity<'a, I>(cves: I) -> Vec<&'a Cve>
    where
        I: IntoIterator<Item = &'a Cve>,
    {
        cves.into_iter()
            .filter(|c| {
                HIGH_SEVERITIES
                    .iter()
                    .any(|s| c.cvss.severity.eq_ignore_ascii_case(s))
            })
            .collect()
    }

    /// Version filtering followed by platform filtering
    pub fn filter_by_version_and_platform<'a, R>(
        records: &'a [R],
        version: &str,
        platform: &str,
        include_all_platforms: bool,
    ) -> Result<Vec<&'a Cve>>
    where
        R: Borrow<CveRecords>,
    {
        let by_version = Self::filter_by_version(records, version)?;
        Self::filter_by_platform(by_version, platform, include_all_platforms)
    }
}

fn has_platform(cve: &Cve, platform: &str) -> bool {
    cve.platforms.iter().any(|p| p.eq_ignore_ascii_case(platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release_notes::domain::{Cvss, Event, Product, Timeline};
    use crate::shared::GraphError;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn cve(id: &str, severity: &str, platforms: &[&str]) -> Cve {
        Cve {
            id: id.to_string(),
            problem: format!("{} problem", id),
            description: vec![],
            cvss: Cvss {
                version: "3.1".to_string(),
                vector: "CVSS:3.1/AV:N".to_string(),
                score: 7.5,
                severity: severity.to_string(),
                source: None,
                temporal_score: None,
            },
            timeline: Timeline {
                disclosure: Event {
                    date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
                    description: "Disclosed".to_string(),
                },
                fixed: None,
                other: None,
            },
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            architectures: vec!["all".to_string()],
            references: vec![],
            mitigation: None,
            weakness: None,
            cna: None,
        }
    }

    fn product(cve_id: &str, release: &str) -> Product {
        Product {
            cve_id: cve_id.to_string(),
            name: "dotnet-runtime".to_string(),
            min_vulnerable: format!("{}.0", release),
            max_vulnerable: format!("{}.1", release),
            fixed: format!("{}.2", release),
            release: release.to_string(),
            commits: vec![],
        }
    }

    fn records(disclosures: Vec<Cve>, products: Vec<Product>) -> CveRecords {
        CveRecords {
            last_updated: "2025-01-14".to_string(),
            title: "Test".to_string(),
            disclosures,
            products,
            packages: vec![],
            commits: None,
            product_name: None,
            product_cves: None,
            package_cves: None,
            release_cves: None,
            severity_cves: None,
            cve_releases: None,
            cve_commits: None,
        }
    }

    fn ids(cves: &[&Cve]) -> Vec<String> {
        cves.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_filter_by_version_matches_products() {
        let sets = vec![records(
            vec![
                cve("CVE-2025-0001", "High", &["all"]),
                cve("CVE-2025-0002", "Low", &["windows"]),
            ],
            vec![product("CVE-2025-0001", "9.0"), product("CVE-2025-0002", "8.0")],
        )];

        let result = CveFilter::filter_by_version(&sets, "9.0").unwrap();
        assert_eq!(ids(&result), vec!["CVE-2025-0001"]);
    }

    #[test]
    fn test_filter_by_version_deduplicates_across_sets() {
        let mut first = cve("CVE-2025-0001", "High", &["all"]);
        first.problem = "first".to_string();
        let mut second = cve("CVE-2025-0001", "High", &["all"]);
        second.problem = "second".to_string();

        let sets = vec![
            records(vec![first], vec![product("CVE-2025-0001", "9.0")]),
            records(vec![second], vec![product("CVE-2025-0001", "9.0")]),
        ];

        let result = CveFilter::filter_by_version(&sets, "9.0").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].problem, "first");
    }

    #[test]
    fn test_filter_by_version_uses_products_from_other_sets() {
        let sets = vec![
            records(vec![cve("CVE-2025-0003", "High", &["linux"])], vec![]),
            records(vec![], vec![product("CVE-2025-0003", "9.0")]),
        ];
        let result = CveFilter::filter_by_version(&sets, "9.0").unwrap();
        assert_eq!(ids(&result), vec!["CVE-2025-0003"]);
    }

    #[test]
    fn test_filter_by_version_is_idempotent() {
        let sets = vec![records(
            vec![
                cve("CVE-2025-0001", "High", &["all"]),
                cve("CVE-2025-0002", "Low", &["windows"]),
                cve("CVE-2025-0003", "Critical", &["linux"]),
            ],
            vec![
                product("CVE-2025-0001", "9.0"),
                product("CVE-2025-0002", "8.0"),
                product("CVE-2025-0003", "9.0"),
            ],
        )];

        let once = CveFilter::filter_by_version(&sets, "9.0").unwrap();
        let refiltered = vec![records(
            once.iter().map(|c| (*c).clone()).collect(),
            sets[0].products.clone(),
        )];
        let twice = CveFilter::filter_by_version(&refiltered, "9.0").unwrap();
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_filter_by_version_accepts_shared_sets() {
        let sets = vec![Arc::new(records(
            vec![cve("CVE-2025-0001", "High", &["all"])],
            vec![product("CVE-2025-0001", "9.0")],
        ))];
        assert_eq!(CveFilter::filter_by_version(&sets, "9.0").unwrap().len(), 1);
        assert!(CveFilter::filter_by_version(&sets, "7.0").unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_version_rejects_empty_version() {
        let sets: Vec<CveRecords> = vec![];
        assert!(matches!(
            CveFilter::filter_by_version(&sets, ""),
            Err(GraphError::InvalidArgument { name: "version", .. })
        ));
    }

    #[test]
    fn test_platform_wildcard() {
        let cves = [cve("CVE-2025-0001", "High", &["all"])];

        let with_all = CveFilter::filter_by_platform(&cves, "windows", true).unwrap();
        assert_eq!(with_all.len(), 1);

        let without_all = CveFilter::filter_by_platform(&cves, "windows", false).unwrap();
        assert!(without_all.is_empty());
    }

    #[test]
    fn test_platform_match_is_case_insensitive() {
        let cves = [
            cve("CVE-2025-0001", "High", &["Windows"]),
            cve("CVE-2025-0002", "High", &["linux"]),
        ];
        let result = CveFilter::filter_by_platform(&cves, "WINDOWS", false).unwrap();
        assert_eq!(ids(&result), vec!["CVE-2025-0001"]);
    }

    #[test]
    fn test_filter_by_platforms() {
        let cves = [
            cve("CVE-2025-0001", "High", &["windows"]),
            cve("CVE-2025-0002", "High", &["linux"]),
            cve("CVE-2025-0003", "High", &["macos"]),
            cve("CVE-2025-0004", "High", &["All"]),
        ];

        let result = CveFilter::filter_by_platforms(&cves, &["Linux", "macOS"], true);
        assert_eq!(
            ids(&result),
            vec!["CVE-2025-0002", "CVE-2025-0003", "CVE-2025-0004"]
        );

        let result = CveFilter::filter_by_platforms(&cves, &["linux"], false);
        assert_eq!(ids(&result), vec!["CVE-2025-0002"]);
    }

    #[test]
    fn test_filter_by_severity() {
        let cves = [
            cve("CVE-2025-0001", "High", &["all"]),
            cve("CVE-2025-0002", "low", &["all"]),
        ];
        let result = CveFilter::filter_by_severity(&cves, "LOW").unwrap();
        assert_eq!(ids(&result), vec!["CVE-2025-0002"]);
        assert!(CveFilter::filter_by_severity(&cves, "").is_err());
    }

    #[test]
    fn test_filter_high_severity() {
        let cves = [
            cve("CVE-2025-0001", "CRITICAL", &["all"]),
            cve("CVE-2025-0002", "Medium", &["all"]),
            cve("CVE-2025-0003", "high", &["all"]),
            cve("CVE-2025-0004", "", &["all"]),
        ];
        let result = CveFilter::filter_high_severity(&cves);
        assert_eq!(ids(&result), vec!["CVE-2025-0001", "CVE-2025-0003"]);
    }

    #[test]
    fn test_version_and_platform_equals_sequential_application() {
        let sets = vec![records(
            vec![
                cve("CVE-2025-0001", "High", &["windows"]),
                cve("CVE-2025-0002", "High", &["linux"]),
                cve("CVE-2025-0003", "High", &["all"]),
            ],
            vec![
                product("CVE-2025-0001", "9.0"),
                product("CVE-2025-0002", "9.0"),
                product("CVE-2025-0003", "9.0"),
            ],
        )];

        let combined = CveFilter::filter_by_version_and_platform(&sets, "9.0", "linux", true).unwrap();
        let by_version = CveFilter::filter_by_version(&sets, "9.0").unwrap();
        let sequential = CveFilter::filter_by_platform(by_version, "linux", true).unwrap();
        assert_eq!(ids(&combined), ids(&sequential));
        assert_eq!(ids(&combined), vec!["CVE-2025-0002", "CVE-2025-0003"]);
    }
}
