/// Mock implementations for testing
pub mod mock_document_fetcher;

pub use mock_document_fetcher::MockDocumentFetcher;
