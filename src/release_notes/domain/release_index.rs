use super::hal::Links;
use super::release_enums::{ReleaseKind, ReleaseType, SupportPhase};
use super::sdk::SdkFeatureBandEntry;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root index of the graph: one entry per major version (8.0, 9.0, ...).
///
/// Entries in `_embedded.releases` are published newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorReleaseVersionIndex {
    pub kind: ReleaseKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_lts_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_year: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary: Option<HashMap<String, String>>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<MajorReleaseVersionIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MajorReleaseVersionIndexEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub releases: Option<Vec<MajorReleaseVersionIndexEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_feature_bands: Option<Vec<SdkFeatureBandEntry>>,
}

/// Major version entry carrying its full lifecycle information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorReleaseVersionIndexEntry {
    /// Major version identifier, e.g. "9.0"
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_type: Option<ReleaseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phase: Option<SupportPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ga_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eol_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_records: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_patches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<String>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Links to documentation and help resources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageLinks {
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Term definitions together with related navigation links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageWithLinks {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default)]
    pub glossary: HashMap<String, String>,
}
