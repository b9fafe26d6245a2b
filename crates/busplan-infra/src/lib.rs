//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories plus the CSV and
//! TOML loaders feeding them.

pub mod csv_loader;
pub mod persistence;
pub mod route_rules_loader;
