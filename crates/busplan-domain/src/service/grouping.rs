//! Grouping employees into routes and stations

use std::collections::{BTreeMap, HashMap};

use crate::model::{AllocationReport, Employee, RouteDetail, RouteGroup, StationGroup};

use super::normalizer::{normalize, LabelRegistry};
use super::route_merge::RouteRules;
use super::vehicle_sizing::size_vehicle;

/// Sort key for stations missing from the route details
const UNORDERED: i64 = i64::MAX;

/// Employees collected for one resolved route, stations in first-seen order
#[derive(Default)]
struct RouteBucket {
    labels: LabelRegistry,
    /// Riders per station, indexed by the registry slot
    riders: Vec<Vec<Employee>>,
}

impl RouteBucket {
    fn push(&mut self, station_name: &str, employee: &Employee) {
        let slot = self.labels.slot_for(station_name);
        if slot == self.riders.len() {
            self.riders.push(Vec::new());
        }
        self.riders[slot].push(employee.clone());
    }
}

/// Station visiting order keyed by normalized (route, station)
struct StationOrder {
    orders: HashMap<(String, String), i64>,
}

impl StationOrder {
    fn from_details(route_details: &[RouteDetail]) -> Self {
        let mut orders = HashMap::new();
        for detail in route_details {
            orders
                .entry((normalize(&detail.route_code), normalize(&detail.station_name)))
                .or_insert(detail.order);
        }
        Self { orders }
    }

    fn order_of(&self, route_label: &str, station_label: &str) -> i64 {
        self.orders
            .get(&(normalize(route_label), normalize(station_label)))
            .copied()
            .unwrap_or(UNORDERED)
    }
}

/// Group employees by resolved route and station.
///
/// Routes come out sorted by label; stations follow the route-detail order,
/// with unknown stations last in first-seen order. Employees keep input order
/// within their station.
pub fn allocate(
    employees: &[Employee],
    route_details: &[RouteDetail],
    rules: &RouteRules,
) -> Vec<RouteGroup> {
    let mut buckets: BTreeMap<String, RouteBucket> = BTreeMap::new();

    for employee in employees {
        let station_name = employee.station_or_unassigned();
        let route_label = rules.resolve_route_label(
            employee.route_or_unassigned(),
            station_name,
            &employee.full_name,
        );
        buckets
            .entry(route_label)
            .or_default()
            .push(station_name, employee);
    }

    let station_order = StationOrder::from_details(route_details);

    buckets
        .into_iter()
        .map(|(route_label, bucket)| build_route_group(route_label, bucket, &station_order))
        .collect()
}

/// Run `allocate` and wrap the result with fleet totals
pub fn build_report(
    employees: &[Employee],
    route_details: &[RouteDetail],
    rules: &RouteRules,
) -> AllocationReport {
    AllocationReport::new(allocate(employees, route_details, rules))
}

fn build_route_group(
    route_label: String,
    bucket: RouteBucket,
    station_order: &StationOrder,
) -> RouteGroup {
    let mut stations: Vec<StationGroup> = bucket
        .labels
        .into_labels()
        .into_iter()
        .zip(bucket.riders)
        .map(|(station_label, employees)| {
            let count = employees.len();
            StationGroup {
                route_label: route_label.clone(),
                station_label,
                employees,
                count,
                vehicle: size_vehicle(count),
            }
        })
        .collect();

    // stable: ties keep first-seen order
    stations.sort_by_key(|s| station_order.order_of(&route_label, &s.station_label));

    let total_employees = stations.iter().map(|s| s.count).sum();
    RouteGroup {
        route_label,
        stations,
        total_employees,
        vehicle: size_vehicle(total_employees),
    }
}
