//! Configuration file support for release-notes-graph.
//!
//! Provides YAML-based configuration through `release-notes-graph.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const CONFIG_FILENAME: &str = "release-notes-graph.config.yml";

/// Release metadata served from the official CDN.
pub const OFFICIAL_BASE_URI: &str = "https://builds.dotnet.microsoft.com/dotnet/release-metadata/";

/// Release-index branch of the dotnet/core repository on GitHub.
pub const GITHUB_BASE_URI: &str =
    "https://raw.githubusercontent.com/dotnet/core/release-index/release-notes/";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Settings used to build a [`ReleaseNotesGraph`](crate::application::ReleaseNotesGraph).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Root of the graph; always ends with `/`
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on disclosure-set fetches in flight during windowed aggregation
    pub max_concurrent_fetches: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_BASE_URI.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

impl GraphConfig {
    /// Default settings pointed at another graph root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("release-notes-graph/{}", env!("CARGO_PKG_VERSION"))
}

/// Appends the trailing `/` that canonical path joining relies on.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Configuration file schema. Every field is optional and falls back to
/// the [`GraphConfig`] default.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub max_concurrent_fetches: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl From<ConfigFile> for GraphConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = GraphConfig::default();
        Self {
            base_url: file
                .base_url
                .map(|url| normalize_base_url(&url))
                .unwrap_or(defaults.base_url),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
            max_concurrent_fetches: file
                .max_concurrent_fetches
                .unwrap_or(defaults.max_concurrent_fetches),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<GraphConfig> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let file: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&file)?;
    warn_unknown_fields(&file);

    Ok(file.into())
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<GraphConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(file: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = file.base_url {
        if base_url.trim().is_empty() {
            bail!(
                "Invalid config: base_url must not be empty.\n\n\
                 💡 Hint: Use the graph root, e.g. \"{}\".",
                GITHUB_BASE_URI
            );
        }
    }

    if file.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: The default is {} seconds.",
            DEFAULT_TIMEOUT_SECS
        );
    }

    if file.max_concurrent_fetches == Some(0) {
        bail!(
            "Invalid config: max_concurrent_fetches must be greater than 0.\n\n\
             💡 Hint: Use 1 to fetch disclosure sets one at a time."
        );
    }

    Ok(())
}

fn warn_unknown_fields(file: &ConfigFile) {
    for key in file.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored");
    }
}
