/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the crate is a library, so its
/// public API is the application layer itself.
pub mod outbound;
