/// Application layer - Graph entry point, navigators and summaries
///
/// This layer turns single document fetches into the typed queries
/// callers use, and coordinates with infrastructure only through the
/// `LinkFollower` port.
pub mod graph;
pub mod navigators;
pub mod read_models;
pub mod summaries;

pub use graph::ReleaseNotesGraph;
pub use navigators::{ArchiveNavigator, ReleaseNavigator};
pub use read_models::{MonthSummary, PatchSummary, ReleaseSummary, YearSummary};
pub use summaries::{ArchivesSummary, ReleasesSummary};
