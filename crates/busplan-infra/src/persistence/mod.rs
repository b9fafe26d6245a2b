//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod csv_employee_repo;
mod csv_route_detail_repo;
mod file_employee_repo;

pub use csv_employee_repo::CsvEmployeeRepository;
pub use csv_route_detail_repo::CsvRouteDetailRepository;
pub use file_employee_repo::FileEmployeeRepository;
