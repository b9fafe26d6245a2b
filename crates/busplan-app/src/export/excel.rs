//! Excel export of allocation reports

use std::path::Path;

use busplan_domain::model::{AllocationReport, VehicleClass};
use busplan_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

const SUMMARY_SHEET: &str = "Summary";
const ALLOCATION_SHEET: &str = "Allocation";

/// One data row of the Allocation sheet
#[derive(Debug, Clone, PartialEq)]
enum AllocationRow {
    Station {
        route: String,
        station: String,
        headcount: usize,
        vehicle_class: VehicleClass,
        vehicle_count: usize,
        employees: String,
    },
    /// Route total, followed by one blank spacer row
    Subtotal {
        route: String,
        headcount: usize,
        vehicle_class: VehicleClass,
        vehicle_count: usize,
    },
}

/// Export an allocation report to an Excel file
pub fn export_allocation_to_excel(report: &AllocationReport, output_path: &Path) -> Result<()> {
    let mut workbook = build_workbook(report)?;
    workbook.save(output_path).map_err(excel_err)?;

    info!(path = %output_path.display(), routes = report.routes.len(), "allocation exported to Excel");
    Ok(())
}

fn build_workbook(report: &AllocationReport) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let allocation_sheet = workbook.add_worksheet();
    write_allocation_sheet(allocation_sheet, &allocation_rows(report))?;

    Ok(workbook)
}

/// Station rows of each route followed by the route's subtotal
fn allocation_rows(report: &AllocationReport) -> Vec<AllocationRow> {
    let mut rows = Vec::new();
    for route in &report.routes {
        for station in &route.stations {
            rows.push(AllocationRow::Station {
                route: route.route_label.clone(),
                station: station.station_label.clone(),
                headcount: station.count,
                vehicle_class: station.vehicle.vehicle_class,
                vehicle_count: station.vehicle.vehicle_count,
                employees: station
                    .employees
                    .iter()
                    .map(|e| e.full_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        rows.push(AllocationRow::Subtotal {
            route: route.route_label.clone(),
            headcount: route.total_employees,
            vehicle_class: route.vehicle.vehicle_class,
            vehicle_count: route.vehicle.vehicle_count,
        });
    }
    rows
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &AllocationReport) -> Result<()> {
    sheet.set_name(SUMMARY_SHEET).map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Bảng phân bổ xe đưa đón", &header_format)
        .map_err(excel_err)?;

    let generated = report.generated_at.format("%Y-%m-%d %H:%M UTC").to_string();
    let rows: [(&str, String); 4] = [
        ("Ngày lập / Generated:", generated),
        ("Số tuyến / Routes:", report.routes.len().to_string()),
        ("Số nhân viên / Employees:", report.total_employees.to_string()),
        ("Số xe / Vehicles:", report.total_vehicles().to_string()),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let row = (i + 2) as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet.write_string(row, 1, value).map_err(excel_err)?;
    }

    sheet
        .write_string_with_format(7, 0, "Loại xe / Vehicle class", &header_format)
        .map_err(excel_err)?;

    let mut row = 8;
    for class in VehicleClass::ALL {
        let count = report.vehicles_by_class.get(&class).copied().unwrap_or(0);
        sheet.write_string(row, 0, class.label_vi()).map_err(excel_err)?;
        sheet.write_number(row, 1, count as f64).map_err(excel_err)?;
        row += 1;
    }

    sheet.set_column_width(0, 28).map_err(excel_err)?;
    sheet.set_column_width(1, 20).map_err(excel_err)?;

    Ok(())
}

fn write_allocation_sheet(sheet: &mut Worksheet, rows: &[AllocationRow]) -> Result<()> {
    sheet.set_name(ALLOCATION_SHEET).map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let subtotal_format = Format::new().set_bold().set_italic();

    let headers = [
        "Tuyến / Route",
        "Trạm / Station",
        "Số người / Headcount",
        "Loại xe / Vehicle",
        "Số xe / Count",
        "Nhân viên / Employees",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    let mut row: u32 = 1;
    for entry in rows {
        match entry {
            AllocationRow::Station {
                route,
                station,
                headcount,
                vehicle_class,
                vehicle_count,
                employees,
            } => {
                sheet.write_string(row, 0, route).map_err(excel_err)?;
                sheet.write_string(row, 1, station).map_err(excel_err)?;
                sheet.write_number(row, 2, *headcount as f64).map_err(excel_err)?;
                sheet.write_string(row, 3, vehicle_class.label_vi()).map_err(excel_err)?;
                sheet.write_number(row, 4, *vehicle_count as f64).map_err(excel_err)?;
                sheet.write_string(row, 5, employees).map_err(excel_err)?;
                row += 1;
            }
            AllocationRow::Subtotal {
                route,
                headcount,
                vehicle_class,
                vehicle_count,
            } => {
                let label = format!("Tổng tuyến {}", route);
                sheet
                    .write_string_with_format(row, 1, &label, &subtotal_format)
                    .map_err(excel_err)?;
                sheet
                    .write_number_with_format(row, 2, *headcount as f64, &subtotal_format)
                    .map_err(excel_err)?;
                sheet
                    .write_string_with_format(row, 3, vehicle_class.label_vi(), &subtotal_format)
                    .map_err(excel_err)?;
                sheet
                    .write_number_with_format(row, 4, *vehicle_count as f64, &subtotal_format)
                    .map_err(excel_err)?;
                row += 2;
            }
        }
    }

    sheet.set_column_width(0, 14).map_err(excel_err)?;
    sheet.set_column_width(1, 32).map_err(excel_err)?;
    sheet.set_column_width(3, 14).map_err(excel_err)?;
    sheet.set_column_width(5, 60).map_err(excel_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use busplan_domain::model::Employee;
    use busplan_domain::service::{build_report, RouteRules};
    use tempfile::tempdir;

    fn employee(code: &str, name: &str, route: &str, station: &str) -> Employee {
        Employee {
            id: code.to_string(),
            code: code.to_string(),
            full_name: name.to_string(),
            phone: None,
            route_code: Some(route.to_string()),
            station_name: Some(station.to_string()),
        }
    }

    #[test]
    fn test_export_creates_file() {
        let employees = vec![employee("NV1", "Nguyễn Văn An", "HCM02", "Ngã 4 Thủ Đức")];
        let report = build_report(&employees, &[], &RouteRules::builtin());

        let dir = tempdir().unwrap();
        let path = dir.path().join("allocation.xlsx");
        export_allocation_to_excel(&report, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_export_empty_report() {
        let report = build_report(&[], &[], &RouteRules::builtin());
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        export_allocation_to_excel(&report, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_workbook_has_summary_and_allocation_sheets() {
        let report = build_report(&[], &[], &RouteRules::builtin());
        let mut workbook = build_workbook(&report).unwrap();
        assert!(workbook.worksheet_from_name(SUMMARY_SHEET).is_ok());
        assert!(workbook.worksheet_from_name(ALLOCATION_SHEET).is_ok());
    }

    #[test]
    fn test_one_row_per_station_then_route_subtotal() {
        let employees = vec![
            employee("NV1", "Nguyễn Văn An", "HCM01", "Suối Tiên"),
            employee("NV2", "Trần Thị Bình", "HCM01", "Bà Chiểu"),
            employee("NV3", "Lê Văn Cường", "HCM01", "suối tiên"),
            employee("NV4", "Phạm Thị Dung", "BH02", "Chợ Biên Hòa"),
        ];
        let report = build_report(&employees, &[], &RouteRules::builtin());
        let rows = allocation_rows(&report);

        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            AllocationRow::Station {
                route: "BH02".to_string(),
                station: "Chợ Biên Hòa".to_string(),
                headcount: 1,
                vehicle_class: VehicleClass::Seat16,
                vehicle_count: 1,
                employees: "Phạm Thị Dung".to_string(),
            }
        );
        assert!(matches!(
            &rows[1],
            AllocationRow::Subtotal { route, headcount: 1, .. } if route == "BH02"
        ));
        assert!(matches!(
            &rows[2],
            AllocationRow::Station { station, headcount: 2, employees, .. }
                if station == "Suối Tiên" && employees == "Nguyễn Văn An, Lê Văn Cường"
        ));
        assert!(matches!(
            &rows[3],
            AllocationRow::Station { station, headcount: 1, .. } if station == "Bà Chiểu"
        ));
        assert_eq!(
            rows[4],
            AllocationRow::Subtotal {
                route: "HCM01".to_string(),
                headcount: 3,
                vehicle_class: VehicleClass::Seat16,
                vehicle_count: 1,
            }
        );
    }
}
