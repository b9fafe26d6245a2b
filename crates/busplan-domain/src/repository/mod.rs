//! Repository trait definitions for the employee and route stores

use busplan_types::Error;

use crate::model::{Employee, RouteDetail};

/// Repository for employee records
pub trait EmployeeRepository {
    /// Load all employees
    fn find_all(&self) -> Result<Vec<Employee>, Error>;

    /// Find an employee by employee code
    fn find_by_code(&self, code: &str) -> Result<Option<Employee>, Error>;

    /// Insert or replace an employee, keyed by code
    fn save(&self, employee: &Employee) -> Result<(), Error>;
}

/// Repository for route details (station order per route)
pub trait RouteDetailRepository {
    /// Load all route details
    fn find_all(&self) -> Result<Vec<RouteDetail>, Error>;

    /// Find details of one route (route code compared case-insensitively)
    fn find_by_route(&self, route_code: &str) -> Result<Vec<RouteDetail>, Error>;
}
