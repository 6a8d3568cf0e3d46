//! release-notes-graph - Typed client for the .NET release-notes graph
//!
//! The release notes are published as a HAL+JSON hypermedia graph: a root
//! index of major versions, per-version patch indexes, a chronological
//! timeline of years and months, and monthly vulnerability disclosure
//! sets. This library fetches, caches and decodes those documents and
//! answers aggregate questions across them.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`release_notes`): Document schemas, the CVE filter and lifecycle policy
//! - **Application Layer** (`application`): Graph entry point, navigators, summaries and read models
//! - **Ports** (`ports`): Fetcher and link follower interfaces
//! - **Adapters** (`adapters`): HTTP fetcher and caching link follower
//! - **Shared** (`shared`): Error type, cancellation and input validation
//!
//! # Example
//!
//! ```no_run
//! use release_notes_graph::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let graph = ReleaseNotesGraph::with_http(OFFICIAL_BASE_URI)?;
//!
//! // Latest patch of the newest supported LTS
//! let releases = graph.releases_summary();
//! if let Some(lts) = releases.get_latest_lts_release().await? {
//!     let latest = graph.release_navigator(lts.version()).get_latest_patch().await?;
//!     println!("{} -> {:?}", lts.version(), latest.map(|p| p.version().to_string()));
//! }
//!
//! // Disclosures affecting 8.0 on Linux during the last six months
//! let records = graph.archives_summary().get_recent_cve_records(6).await?;
//! for cve in CveFilter::filter_by_version_and_platform(&records, "8.0", "linux", true)? {
//!     println!("{} {}", cve.id, cve.cvss.severity);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod release_notes;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::{CachingLinkFollower, HttpDocumentFetcher};
    pub use crate::application::{
        ArchiveNavigator, ArchivesSummary, MonthSummary, PatchSummary, ReleaseNavigator,
        ReleaseNotesGraph, ReleaseSummary, ReleasesSummary, YearSummary,
    };
    pub use crate::config::{GraphConfig, GITHUB_BASE_URI, OFFICIAL_BASE_URI};
    pub use crate::ports::outbound::{DocumentFetcher, LinkFollower};
    pub use crate::release_notes::domain::{
        Cve, CveRecords, Document, DocumentKind, GraphDocument, HalLink, LinkRelations,
        ReleaseType, SupportPhase,
    };
    pub use crate::release_notes::policies::ReleaseStability;
    pub use crate::release_notes::services::CveFilter;
    pub use crate::shared::cancellation::with_cancellation;
    pub use crate::shared::{GraphError, Result};
}
