//! Repository adapters for persistence layer

use std::path::Path;

use busplan_domain::service::RouteRules;
use busplan_infra::persistence::{CsvRouteDetailRepository, FileEmployeeRepository};
use busplan_infra::route_rules_loader::RouteRulesLoader;
use busplan_types::Result;
use tracing::warn;

use crate::config::Config;

/// Open the file-based employee store
pub fn open_employee_repo(config: &Config) -> Result<FileEmployeeRepository> {
    FileEmployeeRepository::open(config.data_dir()?)
}

/// Open the route detail CSV, preferring `path` over the configured file.
///
/// With no file at all the repository is empty and every station sorts last.
pub fn open_route_detail_repo(
    config: &Config,
    path: Option<&Path>,
) -> Result<CsvRouteDetailRepository> {
    match path
        .map(Path::to_path_buf)
        .or_else(|| config.route_details_csv.clone())
    {
        Some(csv_path) => CsvRouteDetailRepository::new(csv_path),
        None => {
            warn!("no route details CSV (--routes or config --set-routes); stations keep first-seen order");
            Ok(CsvRouteDetailRepository::from_details(Vec::new()))
        }
    }
}

/// Load route rules, preferring `path` over the configured file
pub fn load_route_rules(config: &Config, path: Option<&Path>) -> Result<RouteRules> {
    let rules_path = path.or(config.route_rules.as_deref());
    RouteRulesLoader::load_or_builtin(rules_path)
}
