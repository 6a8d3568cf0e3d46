use super::hal::Links;
use super::release_enums::{ReleaseKind, ReleaseType, SupportPhase};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Release manifest (`{version}/manifest.json`) with lifecycle metadata
/// for one major version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseManifest {
    pub kind: ReleaseKind,
    pub title: String,
    pub version: String,
    /// Human-friendly label, e.g. ".NET 9.0"
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_framework: Option<String>,
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
}
