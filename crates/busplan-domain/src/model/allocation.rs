//! Allocation results handed to report renderers

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Employee, VehicleAssignment, VehicleClass};

/// Employees picked up at one station of a resolved route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationGroup {
    pub route_label: String,
    pub station_label: String,
    pub employees: Vec<Employee>,
    pub count: usize,
    pub vehicle: VehicleAssignment,
}

/// All stations of one resolved route, in visiting order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGroup {
    pub route_label: String,
    pub stations: Vec<StationGroup>,
    pub total_employees: usize,
    pub vehicle: VehicleAssignment,
}

impl RouteGroup {
    /// Find a station group by its display label
    pub fn station(&self, label: &str) -> Option<&StationGroup> {
        self.stations.iter().find(|s| s.station_label == label)
    }
}

/// Ordered route groups plus fleet totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    pub generated_at: DateTime<Utc>,
    pub routes: Vec<RouteGroup>,
    pub total_employees: usize,
    /// Route-level vehicle counts summed per class
    pub vehicles_by_class: BTreeMap<VehicleClass, usize>,
}

impl AllocationReport {
    pub fn new(routes: Vec<RouteGroup>) -> Self {
        let total_employees = routes.iter().map(|r| r.total_employees).sum();
        let mut vehicles_by_class = BTreeMap::new();
        for route in &routes {
            if route.vehicle.vehicle_count > 0 {
                *vehicles_by_class.entry(route.vehicle.vehicle_class).or_insert(0) +=
                    route.vehicle.vehicle_count;
            }
        }
        Self {
            generated_at: Utc::now(),
            routes,
            total_employees,
            vehicles_by_class,
        }
    }

    pub fn total_vehicles(&self) -> usize {
        self.vehicles_by_class.values().sum()
    }

    /// Find a route group by its resolved label
    pub fn route(&self, label: &str) -> Option<&RouteGroup> {
        self.routes.iter().find(|r| r.route_label == label)
    }
}
