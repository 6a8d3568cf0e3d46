/// Network adapters for reaching the release-notes graph
mod caching_link_follower;
mod http_document_fetcher;

pub use caching_link_follower::CachingLinkFollower;
pub use http_document_fetcher::HttpDocumentFetcher;
