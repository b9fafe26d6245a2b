//! Allocation Service - build the shuttle allocation report
//!
//! 1. Fetch employees and route details through the repositories
//! 2. Group, merge and size with the domain allocator
//! 3. Optionally keep only selected routes

use busplan_domain::model::AllocationReport;
use busplan_domain::repository::{EmployeeRepository, RouteDetailRepository};
use busplan_domain::service::{allocate, RouteRules};
use busplan_types::Result;
use tracing::info;

/// Options for an allocation run
#[derive(Debug, Clone, Default)]
pub struct AllocationOptions {
    /// Keep only these resolved route labels (case-insensitive); empty keeps all
    pub routes: Vec<String>,
}

impl AllocationOptions {
    fn keeps(&self, route_label: &str) -> bool {
        self.routes.is_empty()
            || self
                .routes
                .iter()
                .any(|r| r.trim().eq_ignore_ascii_case(route_label))
    }
}

pub fn run_allocation(
    employees: &dyn EmployeeRepository,
    route_details: &dyn RouteDetailRepository,
    rules: &RouteRules,
    options: &AllocationOptions,
) -> Result<AllocationReport> {
    let employees = employees.find_all()?;
    let route_details = route_details.find_all()?;

    let routes: Vec<_> = allocate(&employees, &route_details, rules)
        .into_iter()
        .filter(|r| options.keeps(&r.route_label))
        .collect();

    let report = AllocationReport::new(routes);
    info!(
        employees = employees.len(),
        route_details = route_details.len(),
        routes = report.routes.len(),
        vehicles = report.total_vehicles(),
        "allocation built"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use busplan_domain::model::{Employee, RouteDetail, VehicleClass};
    use busplan_infra::persistence::{CsvRouteDetailRepository, FileEmployeeRepository};
    use tempfile::tempdir;

    fn employee(code: &str, route: &str, station: &str) -> Employee {
        Employee {
            id: code.to_string(),
            code: code.to_string(),
            full_name: code.to_string(),
            phone: None,
            route_code: Some(route.to_string()),
            station_name: Some(station.to_string()),
        }
    }

    fn setup() -> (tempfile::TempDir, FileEmployeeRepository, CsvRouteDetailRepository) {
        let dir = tempdir().unwrap();
        let repo = FileEmployeeRepository::open(dir.path().to_path_buf()).unwrap();
        repo.save(&employee("NV1", "HCM02", "Ngã 4 Thủ Đức")).unwrap();
        repo.save(&employee("NV2", "HCM02", "Bà Chiểu")).unwrap();
        repo.save(&employee("NV3", "HCM01", "Suối Tiên")).unwrap();
        let details = CsvRouteDetailRepository::from_details(vec![
            RouteDetail {
                route_code: "HCM01".to_string(),
                station_name: "Suối Tiên".to_string(),
                order: 2,
            },
            RouteDetail {
                route_code: "HCM01".to_string(),
                station_name: "Ngã 4 Thủ Đức".to_string(),
                order: 3,
            },
        ]);
        (dir, repo, details)
    }

    #[test]
    fn test_run_allocation() {
        let (_dir, repo, details) = setup();
        let report = run_allocation(
            &repo,
            &details,
            &RouteRules::builtin(),
            &AllocationOptions::default(),
        )
        .unwrap();
        assert_eq!(report.total_employees, 3);
        assert_eq!(report.routes.len(), 2);

        let hcm01 = report.route("HCM01").unwrap();
        let stations: Vec<&str> = hcm01.stations.iter().map(|s| s.station_label.as_str()).collect();
        assert_eq!(stations, vec!["Suối Tiên", "Ngã 4 Thủ Đức"]);
        assert_eq!(hcm01.vehicle.vehicle_class, VehicleClass::Seat16);
    }

    #[test]
    fn test_route_filter() {
        let (_dir, repo, details) = setup();
        let options = AllocationOptions {
            routes: vec!["hcm02".to_string()],
        };
        let report = run_allocation(&repo, &details, &RouteRules::builtin(), &options).unwrap();
        assert_eq!(report.routes.len(), 1);
        assert_eq!(report.routes[0].route_label, "HCM02");
        assert_eq!(report.total_employees, 1);
    }
}
