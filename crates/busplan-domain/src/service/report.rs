//! Plain-text allocation report

use crate::model::{AllocationReport, VehicleClass};

pub fn generate_allocation_report(report: &AllocationReport) -> String {
    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("            BẢNG PHÂN BỔ XE ĐƯA ĐÓN               \n");
    out.push_str("            Shuttle Allocation Report             \n");
    out.push_str("==================================================\n\n");
    out.push_str("【Tổng quan / Summary】\n");
    out.push_str(&format!("  Số tuyến / Routes:            {}\n", report.routes.len()));
    out.push_str(&format!("  Số nhân viên / Employees:     {}\n", report.total_employees));
    out.push_str(&format!("  Số xe / Vehicles:             {}\n", report.total_vehicles()));
    for class in VehicleClass::ALL {
        if let Some(count) = report.vehicles_by_class.get(&class) {
            out.push_str(&format!("    {:<12} {}\n", class.label_vi(), count));
        }
    }
    out.push('\n');

    if report.routes.is_empty() {
        out.push_str("【Không có nhân viên / No employees】\n\n");
        out.push_str("==================================================\n");
        return out;
    }

    for route in &report.routes {
        out.push_str(&format!(
            "【Tuyến {} / Route {}】 {} người - {}\n",
            route.route_label,
            route.route_label,
            route.total_employees,
            route.vehicle
        ));
        out.push_str("-".repeat(60).as_str());
        out.push('\n');
        out.push_str(&format!("{:<32} {:>8} {:>16}\n", "Trạm / Station", "SL", "Xe / Vehicle"));
        out.push_str("-".repeat(60).as_str());
        out.push('\n');
        for station in &route.stations {
            out.push_str(&format!(
                "{:<32} {:>8} {:>16}\n",
                truncate_str(&station.station_label, 31),
                station.count,
                station.vehicle.to_string()
            ));
        }
        out.push('\n');
    }

    out.push_str("==================================================\n");
    out
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
