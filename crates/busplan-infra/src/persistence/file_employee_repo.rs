//! File-based employee repository implementation

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use busplan_domain::model::Employee;
use busplan_domain::repository::EmployeeRepository;
use busplan_types::{Error, Result};
use tracing::{debug, warn};

/// File-based implementation of EmployeeRepository
///
/// Stores employees in `employees.json`, keyed by employee code.
pub struct FileEmployeeRepository {
    store_path: PathBuf,
    employees: RefCell<BTreeMap<String, Employee>>,
}

impl FileEmployeeRepository {
    /// Create or load an employee repository.
    ///
    /// An unreadable store is an error; it is never replaced by an empty one.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("employees.json");

        let employees = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                warn!(path = %store_path.display(), error = %e, "employee store unreadable");
                Error::Json(e)
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            store_path,
            employees: RefCell::new(employees),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.employees.borrow())?;
        Ok(())
    }

    /// Remove an employee by code
    pub fn remove(&self, code: &str) -> Result<bool> {
        let removed = self.employees.borrow_mut().remove(code.trim()).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Employees assigned to a route (raw route code, case-insensitive)
    pub fn find_by_route(&self, route_code: &str) -> Vec<Employee> {
        self.employees
            .borrow()
            .values()
            .filter(|e| {
                e.route_code
                    .as_deref()
                    .map(|r| r.trim().eq_ignore_ascii_case(route_code.trim()))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.employees.borrow().len()
    }
}

impl EmployeeRepository for FileEmployeeRepository {
    fn find_all(&self) -> std::result::Result<Vec<Employee>, Error> {
        Ok(self.employees.borrow().values().cloned().collect())
    }

    fn find_by_code(&self, code: &str) -> std::result::Result<Option<Employee>, Error> {
        Ok(self.employees.borrow().get(code.trim()).cloned())
    }

    fn save(&self, employee: &Employee) -> std::result::Result<(), Error> {
        debug!(code = %employee.code, "saving employee");
        self.employees
            .borrow_mut()
            .insert(employee.code.trim().to_string(), employee.clone());
        self.persist()
    }
}
