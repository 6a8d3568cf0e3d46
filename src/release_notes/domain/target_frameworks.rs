use serde::{Deserialize, Serialize};

/// Target frameworks supported by one major version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetFrameworksIndex {
    pub version: String,
    pub name: String,
    /// Base moniker, e.g. "net9.0"
    pub target_framework: String,
    #[serde(default)]
    pub frameworks: Vec<TargetFrameworkEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetFrameworkEntry {
    pub tfm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TargetFrameworksIndex {
    /// Finds the entry for an exact moniker such as "net9.0-ios".
    pub fn find(&self, tfm: &str) -> Option<&TargetFrameworkEntry> {
        self.frameworks.iter().find(|f| f.tfm == tfm)
    }
}
