//! Major release view for the releases summary

use crate::release_notes::domain::{Links, MajorReleaseVersionIndexEntry, ReleaseType, SupportPhase};
use crate::release_notes::policies::ReleaseStability;
use chrono::{DateTime, FixedOffset};

/// View of one major release listed in the root index
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseSummary {
    entry: MajorReleaseVersionIndexEntry,
}

impl ReleaseSummary {
    pub fn new(entry: MajorReleaseVersionIndexEntry) -> Self {
        Self { entry }
    }

    /// Major version, e.g. "9.0"
    pub fn version(&self) -> &str {
        &self.entry.version
    }

    pub fn release_type(&self) -> Option<ReleaseType> {
        self.entry.release_type
    }

    pub fn phase(&self) -> Option<SupportPhase> {
        self.entry.support_phase
    }

    pub fn release_date(&self) -> Option<DateTime<FixedOffset>> {
        self.entry.ga_date
    }

    pub fn eol_date(&self) -> Option<DateTime<FixedOffset>> {
        self.entry.eol_date
    }

    /// The index's own `supported` flag; a release that omits it is not supported
    pub fn is_supported(&self) -> bool {
        self.entry.supported.unwrap_or(false)
    }

    pub fn is_lts(&self) -> bool {
        self.entry.release_type == Some(ReleaseType::Lts)
    }

    pub fn is_sts(&self) -> bool {
        self.entry.release_type == Some(ReleaseType::Sts)
    }

    pub fn is_active(&self) -> bool {
        self.entry.support_phase == Some(SupportPhase::Active)
    }

    pub fn is_preview(&self) -> bool {
        self.entry.support_phase == Some(SupportPhase::Preview)
    }

    pub fn is_eol(&self) -> bool {
        self.entry.support_phase == Some(SupportPhase::Eol)
    }

    /// Generally available and still receiving fixes
    pub fn is_stable(&self) -> bool {
        self.entry
            .support_phase
            .is_some_and(ReleaseStability::is_stable)
    }

    pub fn is_pre_release(&self) -> bool {
        self.entry
            .support_phase
            .is_some_and(ReleaseStability::is_pre_release)
    }

    pub fn links(&self) -> &Links {
        &self.entry.links
    }

    pub fn entry(&self) -> &MajorReleaseVersionIndexEntry {
        &self.entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(json: serde_json::Value) -> ReleaseSummary {
        ReleaseSummary::new(serde_json::from_value(json).unwrap())
    }

    #[test]
    fn test_lts_active_release() {
        let release = summary(serde_json::json!({
            "version": "8.0",
            "release_type": "lts",
            "support_phase": "active",
            "supported": true,
            "ga_date": "2023-11-14T00:00:00+00:00"
        }));

        assert_eq!(release.version(), "8.0");
        assert!(release.is_supported());
        assert!(release.is_lts());
        assert!(!release.is_sts());
        assert!(release.is_active());
        assert!(release.is_stable());
        assert!(!release.is_pre_release());
        assert!(!release.is_eol());
        assert!(release.release_date().is_some());
    }

    #[test]
    fn test_preview_release() {
        let release = summary(serde_json::json!({
            "version": "11.0",
            "release_type": "sts",
            "support_phase": "preview",
            "supported": true
        }));
        assert!(release.is_preview());
        assert!(release.is_sts());
        assert!(release.is_pre_release());
        assert!(!release.is_stable());
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let release = summary(serde_json::json!({"version": "1.0"}));
        assert!(!release.is_supported());
        assert!(!release.is_lts());
        assert!(!release.is_sts());
        assert!(!release.is_eol());
        assert!(release.phase().is_none());
    }
}
