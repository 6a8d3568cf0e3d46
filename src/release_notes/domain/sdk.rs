use super::hal::Links;
use super::release_enums::{ReleaseKind, SupportPhase};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// SDK releases of one major version, organized by feature band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkVersionIndex {
    pub kind: ReleaseKind,
    pub version: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_feature_band: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<SdkVersionIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkVersionIndexEmbedded {
    pub feature_bands: Vec<SdkFeatureBandEntry>,
}

/// Feature band entry, e.g. band "9.0.3xx" whose latest SDK is "9.0.307".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkFeatureBandEntry {
    pub version: String,
    pub band: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phase: Option<SupportPhase>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}
