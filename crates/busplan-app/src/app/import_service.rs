//! Import Service - merge imported employee rows into the store
//!
//! Each row is matched by employee code against the cached store contents
//! and classified as created, updated or unchanged. Dry runs classify
//! without writing.

use std::collections::HashSet;

use busplan_domain::model::Employee;
use busplan_domain::repository::EmployeeRepository;
use busplan_types::Error;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::employee_cache::CachedEmployeeLookup;

/// Errors specific to the import service
#[derive(Debug, Error)]
pub enum ImportServiceError {
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Duplicate employee code in import: {0}")]
    DuplicateCode(String),
}

impl From<Error> for ImportServiceError {
    fn from(err: Error) -> Self {
        ImportServiceError::StoreError(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportAction {
    Created,
    Updated,
    Unchanged,
}

/// Outcome of an import, employee codes per action
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    pub dry_run: bool,
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.created.len() + self.updated.len() + self.unchanged.len()
    }

    fn record(&mut self, action: ImportAction, code: &str) {
        let list = match action {
            ImportAction::Created => &mut self.created,
            ImportAction::Updated => &mut self.updated,
            ImportAction::Unchanged => &mut self.unchanged,
        };
        list.push(code.to_string());
    }
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dry_run {
            writeln!(f, "[DRY RUN] No changes written")?;
        }
        writeln!(f, "Imported rows: {}", self.total())?;
        writeln!(f, "  Created:   {}", self.created.len())?;
        writeln!(f, "  Updated:   {}", self.updated.len())?;
        write!(f, "  Unchanged: {}", self.unchanged.len())
    }
}

/// Decide what an imported row does to the store.
///
/// The stored document id is kept so updates do not fork records.
fn classify(existing: Option<Employee>, mut incoming: Employee) -> (ImportAction, Employee) {
    match existing {
        None => (ImportAction::Created, incoming),
        Some(existing) => {
            incoming.id = existing.id.clone();
            if existing == incoming {
                (ImportAction::Unchanged, incoming)
            } else {
                (ImportAction::Updated, incoming)
            }
        }
    }
}

pub fn import_employees<R: EmployeeRepository + ?Sized>(
    repo: &R,
    lookup: &CachedEmployeeLookup<'_, R>,
    rows: &[Employee],
    dry_run: bool,
) -> Result<ImportSummary, ImportServiceError> {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.code.trim()) {
            return Err(ImportServiceError::DuplicateCode(row.code.trim().to_string()));
        }
    }

    let mut summary = ImportSummary {
        dry_run,
        ..ImportSummary::default()
    };

    for row in rows {
        let existing = lookup.find_by_code(&row.code)?;
        let (action, employee) = classify(existing, row.clone());
        debug!(code = %employee.code, ?action, "classified import row");
        if !dry_run && action != ImportAction::Unchanged {
            if let Err(e) = repo.save(&employee) {
                // rows saved so far stay saved; the cache must not hide them
                warn!(code = %employee.code, error = %e, "import stopped part way");
                lookup.invalidate();
                return Err(e.into());
            }
        }
        summary.record(action, &employee.code);
    }

    if !dry_run {
        lookup.invalidate();
    }

    info!(
        created = summary.created.len(),
        updated = summary.updated.len(),
        unchanged = summary.unchanged.len(),
        dry_run,
        "employee import finished"
    );
    Ok(summary)
}
