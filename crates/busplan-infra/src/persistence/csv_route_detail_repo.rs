//! CSV-backed route detail repository

use std::path::{Path, PathBuf};

use busplan_domain::model::RouteDetail;
use busplan_domain::repository::RouteDetailRepository;
use busplan_types::{Error, Result};

use crate::csv_loader::load_route_details_from_csv;

/// Route details loaded once from a CSV file
pub struct CsvRouteDetailRepository {
    csv_path: PathBuf,
    details: Vec<RouteDetail>,
}

impl CsvRouteDetailRepository {
    pub fn new(csv_path: PathBuf) -> Result<Self> {
        let details = load_route_details_from_csv(&csv_path)?;
        Ok(Self { csv_path, details })
    }

    /// Repository over in-memory rows (no backing file)
    pub fn from_details(details: Vec<RouteDetail>) -> Self {
        Self {
            csv_path: PathBuf::new(),
            details,
        }
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Reload data from the CSV file
    pub fn reload(&mut self) -> Result<()> {
        self.details = load_route_details_from_csv(&self.csv_path)?;
        Ok(())
    }
}

impl RouteDetailRepository for CsvRouteDetailRepository {
    fn find_all(&self) -> std::result::Result<Vec<RouteDetail>, Error> {
        Ok(self.details.clone())
    }

    fn find_by_route(&self, route_code: &str) -> std::result::Result<Vec<RouteDetail>, Error> {
        let route_code = route_code.trim();
        let mut details: Vec<RouteDetail> = self
            .details
            .iter()
            .filter(|d| d.route_code.trim().eq_ignore_ascii_case(route_code))
            .cloned()
            .collect();
        details.sort_by_key(|d| d.order);
        Ok(details)
    }
}
