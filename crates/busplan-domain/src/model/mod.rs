//! Domain model types

pub mod allocation;
pub mod employee;
pub mod route_detail;
pub mod vehicle;

pub use allocation::{AllocationReport, RouteGroup, StationGroup};
pub use employee::{Employee, UNASSIGNED_ROUTE, UNASSIGNED_STATION};
pub use route_detail::RouteDetail;
pub use vehicle::{VehicleAssignment, VehicleClass};
