use crate::release_notes::domain::{Links, PatchReleaseVersionIndexEntry, SupportPhase};
use chrono::{DateTime, FixedOffset};

/// View of one patch release listed in a major-version index
#[derive(Debug, Clone, PartialEq)]
pub struct PatchSummary {
    entry: PatchReleaseVersionIndexEntry,
}

impl PatchSummary {
    pub fn new(entry: PatchReleaseVersionIndexEntry) -> Self {
        Self { entry }
    }

    pub fn version(&self) -> &str {
        &self.entry.version
    }

    pub fn phase(&self) -> SupportPhase {
        self.entry.support_phase
    }

    pub fn release_date(&self) -> DateTime<FixedOffset> {
        self.entry.date
    }

    pub fn is_security_update(&self) -> bool {
        self.entry.security
    }

    pub fn links(&self) -> &Links {
        &self.entry.links
    }

    pub fn entry(&self) -> &PatchReleaseVersionIndexEntry {
        &self.entry
    }
}
