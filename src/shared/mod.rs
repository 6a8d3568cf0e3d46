pub mod cancellation;
pub mod error;
pub mod result;
pub mod security;

pub use error::GraphError;
pub use result::Result;
