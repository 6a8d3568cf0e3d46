//! Closed set of document kinds and the decoder registered for each.
//!
//! `DocumentKind::decode` is a total match, so every kind has exactly one
//! decoding rule and an unsupported kind cannot be requested. Decoded
//! documents are wrapped in `Arc` so the cache can hand out shared,
//! immutable references without cloning the payload.

use super::cve::CveRecords;
use super::downloads::DownloadsIndex;
use super::hal::Links;
use super::llms::LlmsIndex;
use super::manifest::ReleaseManifest;
use super::patch_detail::PatchDetailIndex;
use super::patch_index::PatchReleaseVersionIndex;
use super::release_index::MajorReleaseVersionIndex;
use super::sdk::SdkVersionIndex;
use super::target_frameworks::TargetFrameworksIndex;
use super::timeline::{HistoryMonthIndex, HistoryYearIndex, ReleaseHistoryIndex};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    RootIndex,
    MajorVersionIndex,
    PatchDetailIndex,
    ReleaseManifest,
    TimelineIndex,
    YearIndex,
    MonthIndex,
    CveRecords,
    SdkIndex,
    DownloadsIndex,
    TargetFrameworks,
    LlmsIndex,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 12] = [
        DocumentKind::RootIndex,
        DocumentKind::MajorVersionIndex,
        DocumentKind::PatchDetailIndex,
        DocumentKind::ReleaseManifest,
        DocumentKind::TimelineIndex,
        DocumentKind::YearIndex,
        DocumentKind::MonthIndex,
        DocumentKind::CveRecords,
        DocumentKind::SdkIndex,
        DocumentKind::DownloadsIndex,
        DocumentKind::TargetFrameworks,
        DocumentKind::LlmsIndex,
    ];

    /// Decodes a JSON payload using the rules for this kind.
    pub fn decode(self, bytes: &[u8]) -> serde_json::Result<Document> {
        match self {
            DocumentKind::RootIndex => decode_as::<MajorReleaseVersionIndex>(bytes),
            DocumentKind::MajorVersionIndex => decode_as::<PatchReleaseVersionIndex>(bytes),
            DocumentKind::PatchDetailIndex => decode_as::<PatchDetailIndex>(bytes),
            DocumentKind::ReleaseManifest => decode_as::<ReleaseManifest>(bytes),
            DocumentKind::TimelineIndex => decode_as::<ReleaseHistoryIndex>(bytes),
            DocumentKind::YearIndex => decode_as::<HistoryYearIndex>(bytes),
            DocumentKind::MonthIndex => decode_as::<HistoryMonthIndex>(bytes),
            DocumentKind::CveRecords => decode_as::<CveRecords>(bytes),
            DocumentKind::SdkIndex => decode_as::<SdkVersionIndex>(bytes),
            DocumentKind::DownloadsIndex => decode_as::<DownloadsIndex>(bytes),
            DocumentKind::TargetFrameworks => decode_as::<TargetFrameworksIndex>(bytes),
            DocumentKind::LlmsIndex => decode_as::<LlmsIndex>(bytes),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::RootIndex => "root index",
            DocumentKind::MajorVersionIndex => "major-version index",
            DocumentKind::PatchDetailIndex => "patch-detail index",
            DocumentKind::ReleaseManifest => "release manifest",
            DocumentKind::TimelineIndex => "timeline index",
            DocumentKind::YearIndex => "year index",
            DocumentKind::MonthIndex => "month index",
            DocumentKind::CveRecords => "disclosure set",
            DocumentKind::SdkIndex => "SDK index",
            DocumentKind::DownloadsIndex => "downloads index",
            DocumentKind::TargetFrameworks => "target-frameworks index",
            DocumentKind::LlmsIndex => "AI-navigation index",
        };
        write!(f, "{}", name)
    }
}

fn decode_as<T: GraphDocument>(bytes: &[u8]) -> serde_json::Result<Document> {
    let document: T = serde_json::from_slice(bytes)?;
    Ok(Arc::new(document).into_document())
}

/// A decoded document of any kind.
#[derive(Debug, Clone)]
pub enum Document {
    RootIndex(Arc<MajorReleaseVersionIndex>),
    MajorVersionIndex(Arc<PatchReleaseVersionIndex>),
    PatchDetailIndex(Arc<PatchDetailIndex>),
    ReleaseManifest(Arc<ReleaseManifest>),
    TimelineIndex(Arc<ReleaseHistoryIndex>),
    YearIndex(Arc<HistoryYearIndex>),
    MonthIndex(Arc<HistoryMonthIndex>),
    CveRecords(Arc<CveRecords>),
    SdkIndex(Arc<SdkVersionIndex>),
    DownloadsIndex(Arc<DownloadsIndex>),
    TargetFrameworks(Arc<TargetFrameworksIndex>),
    LlmsIndex(Arc<LlmsIndex>),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::RootIndex(_) => DocumentKind::RootIndex,
            Document::MajorVersionIndex(_) => DocumentKind::MajorVersionIndex,
            Document::PatchDetailIndex(_) => DocumentKind::PatchDetailIndex,
            Document::ReleaseManifest(_) => DocumentKind::ReleaseManifest,
            Document::TimelineIndex(_) => DocumentKind::TimelineIndex,
            Document::YearIndex(_) => DocumentKind::YearIndex,
            Document::MonthIndex(_) => DocumentKind::MonthIndex,
            Document::CveRecords(_) => DocumentKind::CveRecords,
            Document::SdkIndex(_) => DocumentKind::SdkIndex,
            Document::DownloadsIndex(_) => DocumentKind::DownloadsIndex,
            Document::TargetFrameworks(_) => DocumentKind::TargetFrameworks,
            Document::LlmsIndex(_) => DocumentKind::LlmsIndex,
        }
    }

    /// The document's `_links` collection. Disclosure sets and
    /// target-frameworks documents carry none.
    pub fn links(&self) -> Option<&Links> {
        match self {
            Document::RootIndex(d) => Some(&d.links),
            Document::MajorVersionIndex(d) => Some(&d.links),
            Document::PatchDetailIndex(d) => Some(&d.links),
            Document::ReleaseManifest(d) => Some(&d.links),
            Document::TimelineIndex(d) => Some(&d.links),
            Document::YearIndex(d) => Some(&d.links),
            Document::MonthIndex(d) => Some(&d.links),
            Document::SdkIndex(d) => Some(&d.links),
            Document::DownloadsIndex(d) => Some(&d.links),
            Document::LlmsIndex(d) => Some(&d.links),
            Document::CveRecords(_) | Document::TargetFrameworks(_) => None,
        }
    }
}

/// A concrete document type that can travel through the link follower.
pub trait GraphDocument: DeserializeOwned + Send + Sync + 'static {
    const KIND: DocumentKind;

    fn into_document(self: Arc<Self>) -> Document;

    /// Recovers the typed document, or `None` if `document` is another kind.
    fn from_document(document: Document) -> Option<Arc<Self>>;
}

macro_rules! graph_document {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl GraphDocument for $ty {
                const KIND: DocumentKind = DocumentKind::$variant;

                fn into_document(self: Arc<Self>) -> Document {
                    Document::$variant(self)
                }

                fn from_document(document: Document) -> Option<Arc<Self>> {
                    match document {
                        Document::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

graph_document! {
    MajorReleaseVersionIndex => RootIndex,
    PatchReleaseVersionIndex => MajorVersionIndex,
    PatchDetailIndex => PatchDetailIndex,
    ReleaseManifest => ReleaseManifest,
    ReleaseHistoryIndex => TimelineIndex,
    HistoryYearIndex => YearIndex,
    HistoryMonthIndex => MonthIndex,
    CveRecords => CveRecords,
    SdkVersionIndex => SdkIndex,
    DownloadsIndex => DownloadsIndex,
    TargetFrameworksIndex => TargetFrameworks,
    LlmsIndex => LlmsIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dispatches_on_kind() {
        let bytes = br#"{"kind": "timeline", "title": "Timeline"}"#;
        let document = DocumentKind::TimelineIndex.decode(bytes).unwrap();
        assert_eq!(document.kind(), DocumentKind::TimelineIndex);
        assert!(document.links().unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let bytes = br#"{"kind": "timeline", "title": "Timeline"}"#;
        assert!(DocumentKind::YearIndex.decode(bytes).is_err());
    }

    #[test]
    fn test_from_document_recovers_type() {
        let bytes = br#"{"kind": "year", "title": "2025", "year": "2025"}"#;
        let document = DocumentKind::YearIndex.decode(bytes).unwrap();
        let year = HistoryYearIndex::from_document(document.clone()).unwrap();
        assert_eq!(year.year, "2025");
        assert!(HistoryMonthIndex::from_document(document).is_none());
    }

    #[test]
    fn test_kind_constants_line_up_with_decoders() {
        assert_eq!(MajorReleaseVersionIndex::KIND, DocumentKind::RootIndex);
        assert_eq!(PatchReleaseVersionIndex::KIND, DocumentKind::MajorVersionIndex);
        assert_eq!(CveRecords::KIND, DocumentKind::CveRecords);
        assert_eq!(TargetFrameworksIndex::KIND, DocumentKind::TargetFrameworks);
    }

    #[test]
    fn test_every_kind_has_a_display_name() {
        for kind in DocumentKind::ALL {
            assert!(!kind.to_string().is_empty());
        }
    }

    #[test]
    fn test_cve_records_have_no_links() {
        let bytes = br#"{"last_updated": "2025-01-14", "title": "Jan", "disclosures": [], "products": [], "packages": []}"#;
        let document = DocumentKind::CveRecords.decode(bytes).unwrap();
        assert!(document.links().is_none());
    }
}
