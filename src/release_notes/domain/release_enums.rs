use serde::{Deserialize, Serialize};
use std::fmt;

/// Support lifecycle phase for a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportPhase {
    Preview,
    GoLive,
    Active,
    Maintenance,
    Eol,
}

impl fmt::Display for SupportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SupportPhase::Preview => "preview",
            SupportPhase::GoLive => "go-live",
            SupportPhase::Active => "active",
            SupportPhase::Maintenance => "maintenance",
            SupportPhase::Eol => "eol",
        };
        write!(f, "{}", s)
    }
}

/// Support duration model: long-term or standard-term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Lts,
    Sts,
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseType::Lts => write!(f, "LTS"),
            ReleaseType::Sts => write!(f, "STS"),
        }
    }
}

/// The `kind` attribute of version-hierarchy documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseKind {
    Root,
    Major,
    Patch,
    Sdk,
    Manifest,
    Band,
    SdkDownload,
    Downloads,
    ComponentDownload,
    Llms,
    Content,
    #[serde(other)]
    Unknown,
}

/// The `kind` attribute of timeline documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryKind {
    Timeline,
    Year,
    Month,
    Manifest,
    #[serde(other)]
    Unknown,
}
