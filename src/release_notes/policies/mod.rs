mod release_stability;

pub use release_stability::ReleaseStability;
