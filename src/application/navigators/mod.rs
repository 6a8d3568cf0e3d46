//! Key-bound navigators over one version's or one year's documents
//!
//! A navigator is cheap to build and holds no documents itself: every
//! call re-resolves its backing index through the graph, whose follower
//! serves repeat requests from cache.

mod archive_navigator;
mod release_navigator;

pub use archive_navigator::ArchiveNavigator;
pub use release_navigator::ReleaseNavigator;
