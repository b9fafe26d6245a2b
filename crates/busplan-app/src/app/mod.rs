//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers.
//!
//! - `allocation_service`: load employees and route details, build the report
//! - `import_service`: import employee rows into the store
//! - `employee_cache`: time-boxed lookup cache used by imports

pub mod allocation_service;
pub mod employee_cache;
pub mod import_service;

pub use allocation_service::{run_allocation, AllocationOptions};
pub use employee_cache::CachedEmployeeLookup;
pub use import_service::{import_employees, ImportAction, ImportServiceError, ImportSummary};
