use super::hal::Links;
use super::release_enums::{ReleaseKind, SupportPhase};
use super::sdk::SdkFeatureBandEntry;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Detailed index for one patch release (`{version}/{patch}/index.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchDetailIndex {
    pub kind: ReleaseKind,
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phase: Option<SupportPhase>,
    pub security: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_records: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_patch_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_security_patch_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_feature_bands: Option<Vec<String>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<PatchDetailIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatchDetailIndexEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk: Option<SdkFeatureBandEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_feature_bands: Option<Vec<SdkFeatureBandEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Links>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntry {
    pub version: String,
    #[serde(rename = "_links", default)]
    pub links: Links,
}
