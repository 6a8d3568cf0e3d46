use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Relation name → link collection carried by every HAL document.
pub type Links = HashMap<String, HalLink>;

/// HAL+JSON hypermedia link providing navigation to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalLink {
    /// Absolute URL to the linked resource
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// MIME type of the linked resource; absent means HAL+JSON
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Whether `href` is an RFC 6570 URI template. Templates are returned
    /// unexpanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
}

impl HalLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
            media_type: None,
            templated: None,
        }
    }

    pub fn is_templated(&self) -> bool {
        self.templated.unwrap_or(false)
    }

    /// True when the link targets a HAL+JSON document this crate can follow.
    pub fn is_hal_json(&self) -> bool {
        match self.media_type.as_deref() {
            None => true,
            Some(t) => t == MediaType::HAL_JSON || t == MediaType::JSON,
        }
    }
}

/// Standard link relation names used across the release-notes graph.
pub struct LinkRelations;

impl LinkRelations {
    // Version hierarchy: root → major → patch
    pub const SELF: &'static str = "self";
    pub const ROOT: &'static str = "root";
    pub const MAJOR: &'static str = "major";
    pub const PATCH: &'static str = "patch";

    // Timeline hierarchy: timeline → year → month
    pub const TIMELINE: &'static str = "timeline";
    pub const YEAR: &'static str = "year";
    pub const MONTH: &'static str = "month";

    pub const MANIFEST: &'static str = "manifest";
    pub const MAJOR_MANIFEST: &'static str = "major-manifest";
    pub const CVE_JSON: &'static str = "cve-json";
    pub const RELEASE: &'static str = "release";
    pub const RELEASE_JSON: &'static str = "release-json";
    pub const DOWNLOADS: &'static str = "downloads";
    pub const COMPATIBILITY_JSON: &'static str = "compatibility-json";
    pub const TARGET_FRAMEWORKS_JSON: &'static str = "target-frameworks-json";

    pub const LATEST_MAJOR: &'static str = "latest-major";
    pub const LATEST_LTS_MAJOR: &'static str = "latest-lts-major";
    pub const LATEST_PATCH: &'static str = "latest-patch";
    pub const LATEST_SECURITY_PATCH: &'static str = "latest-security-patch";
    pub const LATEST_YEAR: &'static str = "latest-year";
    pub const LATEST_MONTH: &'static str = "latest-month";
    pub const LATEST_SECURITY_MONTH: &'static str = "latest-security-month";
    pub const SECURITY_DISCLOSURES: &'static str = "security-disclosures";
    pub const LATEST_SECURITY_DISCLOSURES: &'static str = "latest-security-disclosures";
    pub const LATEST_CVE_JSON: &'static str = "latest-cve-json";

    pub const PREV_PATCH: &'static str = "prev-patch";
    pub const PREV_MONTH: &'static str = "prev-month";
    pub const PREV_YEAR: &'static str = "prev-year";
    pub const PREV_SECURITY_PATCH: &'static str = "prev-security-patch";
    pub const PREV_SECURITY_MONTH: &'static str = "prev-security-month";

    pub const WORKFLOWS: &'static str = "workflows";
}

/// Media types that appear in link `type` attributes.
pub struct MediaType;

impl MediaType {
    pub const MARKDOWN: &'static str = "application/markdown";
    pub const JSON: &'static str = "application/json";
    pub const HAL_JSON: &'static str = "application/hal+json";
    pub const TEXT: &'static str = "text/plain";
    pub const HTML: &'static str = "text/html";
}
