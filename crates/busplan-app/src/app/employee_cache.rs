//! Time-boxed employee lookup cache
//!
//! Imports look up every incoming row by employee code. Instead of hitting
//! the store once per row, the full employee list is fetched once and reused
//! until the TTL expires. The check-then-fetch is not guarded: a concurrent
//! writer can only make the cache stale.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use busplan_domain::model::Employee;
use busplan_domain::repository::EmployeeRepository;
use busplan_types::Result;
use tracing::debug;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    fetched_at: Instant,
    by_code: HashMap<String, Employee>,
}

pub struct CachedEmployeeLookup<'a, R: EmployeeRepository + ?Sized> {
    repo: &'a R,
    ttl: Duration,
    entry: RefCell<Option<CacheEntry>>,
    fetches: Cell<usize>,
}

impl<'a, R: EmployeeRepository + ?Sized> CachedEmployeeLookup<'a, R> {
    pub fn new(repo: &'a R, ttl: Duration) -> Self {
        Self {
            repo,
            ttl,
            entry: RefCell::new(None),
            fetches: Cell::new(0),
        }
    }

    pub fn with_default_ttl(repo: &'a R) -> Self {
        Self::new(repo, DEFAULT_TTL)
    }

    fn is_fresh(&self) -> bool {
        self.entry
            .borrow()
            .as_ref()
            .map(|e| e.fetched_at.elapsed() < self.ttl)
            .unwrap_or(false)
    }

    fn refresh(&self) -> Result<()> {
        let employees = self.repo.find_all()?;
        let by_code = employees
            .into_iter()
            .map(|e| (e.code.trim().to_string(), e))
            .collect::<HashMap<_, _>>();
        debug!(count = by_code.len(), "employee cache refreshed");
        *self.entry.borrow_mut() = Some(CacheEntry {
            fetched_at: Instant::now(),
            by_code,
        });
        self.fetches.set(self.fetches.get() + 1);
        Ok(())
    }

    /// Find an employee by code, refetching the list when the cache expired
    pub fn find_by_code(&self, code: &str) -> Result<Option<Employee>> {
        if !self.is_fresh() {
            self.refresh()?;
        }
        Ok(self
            .entry
            .borrow()
            .as_ref()
            .and_then(|e| e.by_code.get(code.trim()).cloned()))
    }

    /// Drop cached data so the next lookup refetches
    pub fn invalidate(&self) {
        *self.entry.borrow_mut() = None;
    }

    /// Number of times the underlying store was read
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}
