//! Output formatting module

use busplan_domain::model::{AllocationReport, Employee, VehicleAssignment};
use busplan_domain::service::generate_allocation_report;
use busplan_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &AllocationReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", generate_allocation_report(report));
    }
    Ok(())
}

pub fn output_assignment(
    output_format: OutputFormat,
    headcount: usize,
    assignment: &VehicleAssignment,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(assignment)?);
    } else {
        println!("Headcount: {}", headcount);
        println!(
            "Vehicle:   {} ({}) x{}",
            assignment.vehicle_class.label_vi(),
            assignment.vehicle_class,
            assignment.vehicle_count
        );
    }
    Ok(())
}

pub fn output_employees(output_format: OutputFormat, employees: &[Employee]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(employees)?);
        return Ok(());
    }

    if employees.is_empty() {
        println!("No employees stored.");
        return Ok(());
    }

    println!(
        "{:<10} {:<28} {:<10} {:<30}",
        "Code", "Name", "Route", "Station"
    );
    println!("{}", "-".repeat(80));
    for e in employees {
        println!(
            "{:<10} {:<28} {:<10} {:<30}",
            e.code,
            e.full_name,
            e.route_code.as_deref().unwrap_or("-"),
            e.station_name.as_deref().unwrap_or("-")
        );
    }
    println!("\nTotal: {} employees", employees.len());
    Ok(())
}
