//! Read-only employee repository over an import CSV

use std::path::{Path, PathBuf};

use busplan_domain::model::Employee;
use busplan_domain::repository::EmployeeRepository;
use busplan_types::{Error, Result};

use crate::csv_loader::load_employees_from_csv;

/// Employees loaded once from a CSV file; `save` is rejected
pub struct CsvEmployeeRepository {
    csv_path: PathBuf,
    employees: Vec<Employee>,
}

impl CsvEmployeeRepository {
    pub fn new(csv_path: PathBuf) -> Result<Self> {
        let employees = load_employees_from_csv(&csv_path)?;
        Ok(Self { csv_path, employees })
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

impl EmployeeRepository for CsvEmployeeRepository {
    fn find_all(&self) -> std::result::Result<Vec<Employee>, Error> {
        Ok(self.employees.clone())
    }

    fn find_by_code(&self, code: &str) -> std::result::Result<Option<Employee>, Error> {
        let code = code.trim();
        Ok(self.employees.iter().find(|e| e.code == code).cloned())
    }

    fn save(&self, _employee: &Employee) -> std::result::Result<(), Error> {
        Err(Error::ReadOnly(self.csv_path.display().to_string()))
    }
}
