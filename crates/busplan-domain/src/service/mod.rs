//! Domain services

pub mod grouping;
pub mod normalizer;
pub mod report;
pub mod route_merge;
pub mod vehicle_sizing;

pub use grouping::{allocate, build_report};
pub use normalizer::{normalize, LabelRegistry};
pub use report::generate_allocation_report;
pub use route_merge::{RouteFamily, RouteRules};
pub use vehicle_sizing::size_vehicle;
