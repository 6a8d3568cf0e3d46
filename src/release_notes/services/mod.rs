mod cve_filter;

pub use cve_filter::{CveFilter, ALL_PLATFORMS};
