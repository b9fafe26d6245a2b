//! Vehicle sizing from headcount

use crate::model::{VehicleAssignment, VehicleClass};

/// Headcount ceilings for booking a single vehicle, smallest class first
const SIZING_TIERS: [(usize, VehicleClass); 3] = [
    (16, VehicleClass::Seat16),
    (29, VehicleClass::Seat29),
    (44, VehicleClass::Seat45),
];

/// Vehicle class and count required to carry `headcount` employees.
///
/// | headcount | class   | count         |
/// |-----------|---------|---------------|
/// | 1-16      | 16-seat | 1             |
/// | 17-29     | 29-seat | 1             |
/// | 30-44     | 45-seat | 1             |
/// | > 44      | 45-seat | ceil(n / 44)  |
///
/// A headcount of zero needs no vehicle.
pub fn size_vehicle(headcount: usize) -> VehicleAssignment {
    let vehicle_class = SIZING_TIERS
        .iter()
        .find(|(ceiling, _)| headcount <= *ceiling)
        .map(|(_, class)| *class)
        .unwrap_or(VehicleClass::Seat45);

    VehicleAssignment {
        vehicle_class,
        vehicle_count: vehicle_class.vehicles_needed(headcount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sized(headcount: usize, class: VehicleClass, count: usize) {
        let assignment = size_vehicle(headcount);
        assert_eq!(assignment.vehicle_class, class, "class for {}", headcount);
        assert_eq!(assignment.vehicle_count, count, "count for {}", headcount);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_sized(1, VehicleClass::Seat16, 1);
        assert_sized(10, VehicleClass::Seat16, 1);
        assert_sized(11, VehicleClass::Seat16, 1);
        assert_sized(16, VehicleClass::Seat16, 1);
        assert_sized(17, VehicleClass::Seat29, 1);
        assert_sized(29, VehicleClass::Seat29, 1);
        assert_sized(30, VehicleClass::Seat45, 1);
        assert_sized(44, VehicleClass::Seat45, 1);
        assert_sized(45, VehicleClass::Seat45, 2);
    }

    #[test]
    fn test_mid_range() {
        assert_sized(25, VehicleClass::Seat29, 1);
    }

    #[test]
    fn test_large_groups() {
        assert_sized(50, VehicleClass::Seat45, 2);
        assert_sized(88, VehicleClass::Seat45, 2);
        assert_sized(89, VehicleClass::Seat45, 3);
    }

    #[test]
    fn test_zero_headcount() {
        assert_sized(0, VehicleClass::Seat16, 0);
    }

    #[test]
    fn test_vehicle_count_is_monotonic() {
        let mut previous = 0;
        for n in 0..=500 {
            let count = size_vehicle(n).vehicle_count;
            assert!(count >= previous, "count dropped at {}", n);
            previous = count;
        }
    }
}
