use super::hal::Links;
use super::release_enums::{ReleaseKind, ReleaseType, SupportPhase};
use super::release_index::UsageWithLinks;
use super::sdk::SdkFeatureBandEntry;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Major-version index (`{version}/index.json`): the patch releases of one
/// major version, newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchReleaseVersionIndex {
    pub kind: ReleaseKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_patch_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_security_patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_security_patch_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_type: Option<ReleaseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phase: Option<SupportPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ga_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eol_date: Option<DateTime<FixedOffset>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageWithLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary: Option<HashMap<String, String>>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<PatchReleaseVersionIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchReleaseVersionIndexEmbedded {
    #[serde(default)]
    pub patches: Vec<PatchReleaseVersionIndexEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_records: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_feature_bands: Option<Vec<SdkFeatureBandEntry>>,
}

/// Patch release entry embedded in a major-version or month index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchReleaseVersionIndexEntry {
    /// Patch version, e.g. "9.0.2"
    pub version: String,
    pub date: DateTime<FixedOffset>,
    pub year: String,
    pub month: String,
    pub security: bool,
    pub support_phase: SupportPhase,
    /// Only present in month indexes, where patches of several majors mix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}
