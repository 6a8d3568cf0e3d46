use super::hal::Links;
use super::release_enums::{ReleaseKind, ReleaseType, SupportPhase};
use super::timeline::HistoryMonthSummary;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// AI-navigation index: latest patches, security status and canned
/// navigation workflows in a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmsIndex {
    pub kind: ReleaseKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_pre_read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_lts_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_patch_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_security_patch_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_major_releases: Option<Vec<String>>,
    #[serde(rename = "_workflows", default, skip_serializing_if = "Option::is_none")]
    pub workflows: Option<HashMap<String, LlmsWorkflow>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<LlmsIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LlmsIndexEmbedded {
    /// Current patch per supported major version, keyed by major version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patches: Option<HashMap<String, LlmsPatchEntry>>,
    /// Most recent security months, newest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_security_months: Option<Vec<HistoryMonthSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmsPatchEntry {
    pub version: String,
    pub release_type: ReleaseType,
    pub security: bool,
    pub support_phase: SupportPhase,
    pub supported: bool,
    pub sdk_version: String,
    pub latest_security_patch: String,
    pub latest_security_patch_date: DateTime<FixedOffset>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// A canned route through the graph expressed as link relations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LlmsWorkflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub follow_path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_embedded: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_property: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_link: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yields: Option<WorkflowYields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hints: Option<Vec<String>>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowYields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}
