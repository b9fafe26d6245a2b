//! Employee record as delivered by the employee store

use serde::{Deserialize, Serialize};

/// Label used for employees without a route code
pub const UNASSIGNED_ROUTE: &str = "Chưa có tuyến";

/// Label used for employees without a pickup station
pub const UNASSIGNED_STATION: &str = "Chưa có trạm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,                   // document id
    pub code: String,                 // mã nhân viên
    pub full_name: String,            // họ tên
    #[serde(default)]
    pub phone: Option<String>,        // số điện thoại
    #[serde(default)]
    pub route_code: Option<String>,   // mã tuyến (HCM01, BH02, ...)
    #[serde(default)]
    pub station_name: Option<String>, // trạm xe
}

impl Employee {
    /// Route code, or the unassigned label when missing or blank
    pub fn route_or_unassigned(&self) -> &str {
        non_blank(self.route_code.as_deref()).unwrap_or(UNASSIGNED_ROUTE)
    }

    /// Station name, or the unassigned label when missing or blank
    pub fn station_or_unassigned(&self) -> &str {
        non_blank(self.station_name.as_deref()).unwrap_or(UNASSIGNED_STATION)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(route: Option<&str>, station: Option<&str>) -> Employee {
        Employee {
            id: "nv001".to_string(),
            code: "NV001".to_string(),
            full_name: "Nguyễn Văn An".to_string(),
            phone: None,
            route_code: route.map(str::to_string),
            station_name: station.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_fields_map_to_unassigned() {
        let e = employee(None, None);
        assert_eq!(e.route_or_unassigned(), UNASSIGNED_ROUTE);
        assert_eq!(e.station_or_unassigned(), UNASSIGNED_STATION);
    }

    #[test]
    fn test_blank_fields_map_to_unassigned() {
        let e = employee(Some("   "), Some(""));
        assert_eq!(e.route_or_unassigned(), UNASSIGNED_ROUTE);
        assert_eq!(e.station_or_unassigned(), UNASSIGNED_STATION);
    }

    #[test]
    fn test_values_are_trimmed() {
        let e = employee(Some(" HCM01 "), Some("Bà Chiểu  "));
        assert_eq!(e.route_or_unassigned(), "HCM01");
        assert_eq!(e.station_or_unassigned(), "Bà Chiểu");
    }
}
