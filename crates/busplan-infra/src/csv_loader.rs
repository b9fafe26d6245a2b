//! CSV loaders for employee imports and route details
//!
//! Files exported from spreadsheets usually carry a UTF-8 BOM and may or may
//! not start with a header row. Recognized headers (Vietnamese or English)
//! select columns by name; otherwise columns are positional.

use std::fs;
use std::path::Path;

use busplan_domain::model::{Employee, RouteDetail};
use busplan_types::{Error, Result};
use tracing::{debug, warn};

/// Positional layout: code, full_name, phone, route_code, station_name
const EMPLOYEE_COLUMNS: [(&str, &[&str]); 5] = [
    ("code", &["code", "mã nv", "mã nhân viên", "manv"]),
    ("full_name", &["full_name", "name", "họ tên", "họ và tên", "tên"]),
    ("phone", &["phone", "sđt", "số điện thoại", "điện thoại"]),
    ("route_code", &["route_code", "route", "tuyến", "mã tuyến", "tuyến xe"]),
    ("station_name", &["station_name", "station", "trạm", "trạm xe", "điểm đón"]),
];

/// Positional layout: route_code, station_name, order
const ROUTE_DETAIL_COLUMNS: [(&str, &[&str]); 3] = [
    ("route_code", &["route_code", "route", "tuyến", "mã tuyến"]),
    ("station_name", &["station_name", "station", "trạm", "trạm xe"]),
    ("order", &["order", "thứ tự", "stt"]),
];

/// Column positions resolved from a header row or from the default layout
struct ColumnMap {
    positions: Vec<Option<usize>>,
}

impl ColumnMap {
    fn positional(count: usize) -> Self {
        Self {
            positions: (0..count).map(Some).collect(),
        }
    }

    /// Map columns by header names; `None` when the row is not a header
    fn from_header(record: &csv::StringRecord, columns: &[(&str, &[&str])]) -> Option<Self> {
        let headers: Vec<String> = record.iter().map(|h| h.trim().to_lowercase()).collect();
        let positions: Vec<Option<usize>> = columns
            .iter()
            .map(|(_, aliases)| headers.iter().position(|h| aliases.contains(&h.as_str())))
            .collect();
        if positions.iter().any(Option::is_some) {
            Some(Self { positions })
        } else {
            None
        }
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, column: usize) -> Option<&'r str> {
        self.positions
            .get(column)
            .copied()
            .flatten()
            .and_then(|pos| record.get(pos))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn require(&self, columns: &[(&str, &[&str])], required: &[usize]) -> Result<()> {
        for &column in required {
            if self.positions.get(column).copied().flatten().is_none() {
                return Err(Error::Csv(format!("Missing required column: {}", columns[column].0)));
            }
        }
        Ok(())
    }
}

fn read_records(content: &str) -> Result<Vec<csv::StringRecord>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::Csv(e.to_string()))?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

/// Split records into a column map and data rows (with 1-based file line numbers)
fn split_header<'a>(
    records: &'a [csv::StringRecord],
    columns: &[(&str, &[&str])],
) -> (ColumnMap, Vec<(u64, &'a csv::StringRecord)>) {
    let numbered = records.iter().enumerate().map(|(i, r)| {
        let line = r.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
        (line, r)
    });
    match records.first().and_then(|first| ColumnMap::from_header(first, columns)) {
        Some(map) => (map, numbered.skip(1).collect()),
        None => (ColumnMap::positional(columns.len()), numbered.collect()),
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Load employees from a CSV file
///
/// Columns: code, full_name, [phone], [route_code], [station_name]
pub fn load_employees_from_csv(path: &Path) -> Result<Vec<Employee>> {
    let content = read_file(path)?;
    let employees = parse_employees(&content)?;
    debug!(path = %path.display(), count = employees.len(), "loaded employees from CSV");
    Ok(employees)
}

pub fn parse_employees(content: &str) -> Result<Vec<Employee>> {
    let records = read_records(content)?;
    let (map, rows) = split_header(&records, &EMPLOYEE_COLUMNS);
    map.require(&EMPLOYEE_COLUMNS, &[0, 1])?;

    let mut employees = Vec::with_capacity(rows.len());
    for (line, record) in rows {
        let code = map.get(record, 0).ok_or_else(|| Error::InvalidRecord {
            line,
            reason: "employee code is empty".to_string(),
        })?;
        let full_name = match map.get(record, 1) {
            Some(name) => name,
            None => {
                warn!(line, code, "employee without a name");
                ""
            }
        };
        employees.push(Employee {
            id: code.to_string(),
            code: code.to_string(),
            full_name: full_name.to_string(),
            phone: map.get(record, 2).map(str::to_string),
            route_code: map.get(record, 3).map(str::to_string),
            station_name: map.get(record, 4).map(str::to_string),
        });
    }
    Ok(employees)
}

/// Load route details from a CSV file
///
/// Columns: route_code, station_name, order
pub fn load_route_details_from_csv(path: &Path) -> Result<Vec<RouteDetail>> {
    let content = read_file(path)?;
    let details = parse_route_details(&content)?;
    debug!(path = %path.display(), count = details.len(), "loaded route details from CSV");
    Ok(details)
}

pub fn parse_route_details(content: &str) -> Result<Vec<RouteDetail>> {
    let records = read_records(content)?;
    let (map, rows) = split_header(&records, &ROUTE_DETAIL_COLUMNS);
    map.require(&ROUTE_DETAIL_COLUMNS, &[0, 1, 2])?;

    let mut details = Vec::with_capacity(rows.len());
    for (line, record) in rows {
        let route_code = map.get(record, 0).ok_or_else(|| Error::InvalidRecord {
            line,
            reason: "route code is empty".to_string(),
        })?;
        let station_name = map.get(record, 1).ok_or_else(|| Error::InvalidRecord {
            line,
            reason: "station name is empty".to_string(),
        })?;
        let order_str = map.get(record, 2).unwrap_or("");
        let order: i64 = order_str.parse().map_err(|_| Error::InvalidRecord {
            line,
            reason: format!("invalid order: {:?}", order_str),
        })?;
        details.push(RouteDetail {
            route_code: route_code.to_string(),
            station_name: station_name.to_string(),
            order,
        });
    }
    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employees_positional() {
        let csv = "NV001,Nguyễn Văn An,0901234567,HCM02,Ngã 4 Thủ Đức\nNV002,Trần Thị Bích,,,\n";
        let employees = parse_employees(csv).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].code, "NV001");
        assert_eq!(employees[0].route_code.as_deref(), Some("HCM02"));
        assert_eq!(employees[0].station_name.as_deref(), Some("Ngã 4 Thủ Đức"));
        assert_eq!(employees[1].phone, None);
        assert_eq!(employees[1].route_code, None);
    }

    #[test]
    fn test_parse_employees_vietnamese_header_any_order() {
        let csv = "\u{feff}Họ tên,Mã NV,Trạm xe,Tuyến xe\nLê Văn Cường,NV003,Bà Chiểu,HCM02\n";
        let employees = parse_employees(csv).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].code, "NV003");
        assert_eq!(employees[0].full_name, "Lê Văn Cường");
        assert_eq!(employees[0].station_name.as_deref(), Some("Bà Chiểu"));
        assert_eq!(employees[0].route_code.as_deref(), Some("HCM02"));
        assert_eq!(employees[0].phone, None);
    }

    #[test]
    fn test_parse_employees_missing_code_column() {
        let csv = "name,route\nA,HCM01\n";
        assert!(matches!(parse_employees(csv), Err(Error::Csv(_))));
    }

    #[test]
    fn test_parse_employees_empty_code_reports_line() {
        let csv = "code,name\nNV1,A\n,B\n";
        match parse_employees(csv) {
            Err(Error::InvalidRecord { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_line_counts_skipped_blank_lines() {
        let csv = "code,name\n\nNV1,A\n,,\n\n,B\n";
        match parse_employees(csv) {
            Err(Error::InvalidRecord { line, .. }) => assert_eq!(line, 6),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_employees_skips_blank_lines() {
        let csv = "code,name\n\nNV1,A\n,,\n";
        let employees = parse_employees(csv).unwrap();
        assert_eq!(employees.len(), 1);
    }

    #[test]
    fn test_parse_route_details() {
        let csv = "route_code,station_name,order\nHCM01,Bến xe Miền Đông,1\nHCM01,Suối Tiên,2\n";
        let details = parse_route_details(csv).unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[1].station_name, "Suối Tiên");
        assert_eq!(details[1].order, 2);
    }

    #[test]
    fn test_parse_route_details_invalid_order() {
        let csv = "HCM01,Suối Tiên,hai\n";
        match parse_route_details(csv) {
            Err(Error::InvalidRecord { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("hai"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_route_details_from_csv(Path::new("/nonexistent/routes.csv"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
