pub mod cve;
pub mod document;
pub mod downloads;
pub mod hal;
pub mod llms;
pub mod manifest;
pub mod patch_detail;
pub mod patch_index;
pub mod release_enums;
pub mod release_index;
pub mod sdk;
pub mod target_frameworks;
pub mod timeline;

pub use cve::{Cna, CnaFaq, CommitInfo, Cve, CveRecords, Cvss, Event, Package, Product, Timeline};
pub use document::{Document, DocumentKind, GraphDocument};
pub use downloads::DownloadsIndex;
pub use hal::{HalLink, LinkRelations, Links, MediaType};
pub use llms::LlmsIndex;
pub use manifest::ReleaseManifest;
pub use patch_detail::PatchDetailIndex;
pub use patch_index::{PatchReleaseVersionIndex, PatchReleaseVersionIndexEntry};
pub use release_enums::{HistoryKind, ReleaseKind, ReleaseType, SupportPhase};
pub use release_index::{MajorReleaseVersionIndex, MajorReleaseVersionIndexEntry};
pub use sdk::{SdkFeatureBandEntry, SdkVersionIndex};
pub use target_frameworks::TargetFrameworksIndex;
pub use timeline::{
    CveRecordSummary, HistoryMonthIndex, HistoryMonthSummary, HistoryYearEntry, HistoryYearIndex,
    ReleaseHistoryIndex,
};
