//! Read models over embedded index entries
//!
//! These views wrap one entry of an index document's `_embedded`
//! collection and add the derived flags the summaries filter on.

mod month_summary;
mod patch_summary;
mod release_summary;
mod year_summary;

pub use month_summary::MonthSummary;
pub use patch_summary::PatchSummary;
pub use release_summary::ReleaseSummary;
pub use year_summary::YearSummary;
