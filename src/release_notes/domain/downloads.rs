use super::hal::Links;
use super::release_enums::{ReleaseKind, SupportPhase};
use serde::{Deserialize, Serialize};

/// Index of download entry points for one major version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadsIndex {
    pub kind: ReleaseKind,
    pub version: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<DownloadsIndexEmbedded>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DownloadsIndexEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_bands: Option<Vec<FeatureBandEntry>>,
}

/// Component entry: runtime, aspnetcore, windowsdesktop or sdk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub name: String,
    pub title: String,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureBandEntry {
    pub version: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phase: Option<SupportPhase>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}
