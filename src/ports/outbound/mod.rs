/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the graph core uses to reach the
/// remote release-notes documents.
pub mod document_fetcher;
pub mod link_follower;

pub use document_fetcher::DocumentFetcher;
pub use link_follower::LinkFollower;
