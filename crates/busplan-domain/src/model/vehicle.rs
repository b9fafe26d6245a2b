//! Shuttle vehicle classes

use serde::{Deserialize, Serialize};

/// Bus seating class used to carry a group of employees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleClass {
    /// 16-seat minibus
    #[serde(rename = "16-seat")]
    Seat16,
    /// 29-seat coach
    #[serde(rename = "29-seat")]
    Seat29,
    /// 45-seat coach
    #[serde(rename = "45-seat")]
    Seat45,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Seat16, VehicleClass::Seat29, VehicleClass::Seat45];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Seat16 => "16-seat",
            VehicleClass::Seat29 => "29-seat",
            VehicleClass::Seat45 => "45-seat",
        }
    }

    /// Vietnamese label used in printed reports
    pub fn label_vi(&self) -> &'static str {
        match self {
            VehicleClass::Seat16 => "Xe 16 chỗ",
            VehicleClass::Seat29 => "Xe 29 chỗ",
            VehicleClass::Seat45 => "Xe 45 chỗ",
        }
    }

    /// Largest headcount a single vehicle of this class is booked for
    pub fn single_vehicle_ceiling(&self) -> usize {
        match self {
            VehicleClass::Seat16 => 16,
            VehicleClass::Seat29 => 29,
            VehicleClass::Seat45 => 44,
        }
    }

    /// Passengers per vehicle once a group needs more than one vehicle
    pub fn passenger_budget(&self) -> usize {
        match self {
            VehicleClass::Seat16 => 15,
            VehicleClass::Seat29 => 28,
            VehicleClass::Seat45 => 44,
        }
    }

    /// Number of vehicles of this class needed for `headcount` passengers
    pub fn vehicles_needed(&self, headcount: usize) -> usize {
        if headcount == 0 {
            0
        } else if headcount <= self.single_vehicle_ceiling() {
            1
        } else {
            headcount.div_ceil(self.passenger_budget())
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Vehicle requirement for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAssignment {
    pub vehicle_class: VehicleClass,
    pub vehicle_count: usize,
}

impl std::fmt::Display for VehicleAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{}", self.vehicle_class, self.vehicle_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicles_needed_within_ceiling() {
        assert_eq!(VehicleClass::Seat16.vehicles_needed(16), 1);
        assert_eq!(VehicleClass::Seat29.vehicles_needed(29), 1);
        assert_eq!(VehicleClass::Seat45.vehicles_needed(44), 1);
    }

    #[test]
    fn test_vehicles_needed_overflow_uses_passenger_budget() {
        // 17 passengers on 16-seaters: ceil(17 / 15) = 2
        assert_eq!(VehicleClass::Seat16.vehicles_needed(17), 2);
        // 57 passengers on 29-seaters: ceil(57 / 28) = 3
        assert_eq!(VehicleClass::Seat29.vehicles_needed(57), 3);
        assert_eq!(VehicleClass::Seat45.vehicles_needed(89), 3);
    }

    #[test]
    fn test_vehicles_needed_zero() {
        for class in VehicleClass::ALL {
            assert_eq!(class.vehicles_needed(0), 0);
        }
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&VehicleClass::Seat29).unwrap();
        assert_eq!(json, "\"29-seat\"");
    }
}
