//! Application service layer - use cases, config, import, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
