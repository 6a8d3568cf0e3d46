//! Graph-wide summaries over the root index and the release timeline

mod archives_summary;
mod releases_summary;

pub use archives_summary::ArchivesSummary;
pub use releases_summary::ReleasesSummary;
