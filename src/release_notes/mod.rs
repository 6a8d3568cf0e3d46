/// Release-notes domain layer
///
/// Document schemas, the kind → decoder registry, lifecycle policies and
/// the pure CVE filter service. Nothing in this layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
