//! Domain module containing the shuttle allocation types and services

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::{EmployeeRepository, RouteDetailRepository};
