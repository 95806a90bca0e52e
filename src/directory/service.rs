//! The in-memory employee directory.
//!
//! This module provides the [`Directory`] type, which owns the authoritative
//! list of employees and writes it back to the data file after every change.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Employee, PerformanceAction};
use crate::storage::{RejectedLine, load_employees_with, save_employees};

use super::sort::SortCriteria;
use super::update::EmployeeUpdate;

/// An ordered collection of employees backed by a data file.
///
/// Mutating operations (`add`, `delete`, `update`, `record_performance`) are
/// write-through: the whole collection is saved before they return. Changes
/// made through [`Directory::find_by_id_mut`] are not saved until
/// [`Directory::save_changes`] is called.
///
/// One directory should own a data file at a time; nothing guards against
/// two instances writing the same file.
///
/// # Example
///
/// ```no_run
/// use staff_directory::directory::{Directory, SortCriteria};
/// use staff_directory::models::Employee;
/// use rust_decimal::Decimal;
///
/// let mut directory = Directory::open("employee_data.csv")?;
/// directory.add(Employee::regular("E010", "Eva Green", "Marketing", Decimal::new(68000, 0))?)?;
/// directory.sort(SortCriteria::BySalaryDescending);
///
/// for employee in directory.employees() {
///     println!("{}", employee);
/// }
/// # Ok::<(), staff_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Directory {
    employees: Vec<Employee>,
    path: PathBuf,
    seed_missing_file: bool,
}

impl Directory {
    /// Creates an empty directory bound to `path` without touching the file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            employees: Vec::new(),
            path: path.as_ref().to_path_buf(),
            seed_missing_file: true,
        }
    }

    /// Creates a directory bound to `path` and loads it.
    ///
    /// A missing file is created with seed records first.
    pub fn open<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let mut directory = Self::new(path);
        let path = directory.path.clone();
        directory.load(path)?;
        Ok(directory)
    }

    /// Creates and loads a directory as described by `config`.
    pub fn from_config(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let mut directory = Self::new(&config.data_file);
        directory.seed_missing_file = config.seed_missing_file;
        directory.load(&config.data_file)?;
        Ok(directory)
    }

    /// Replaces the collection with the contents of `path`.
    ///
    /// On success the directory is rebound to `path` and the lines that were
    /// skipped as malformed are returned. On an I/O error the collection and
    /// the bound path are left as they were.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> DirectoryResult<Vec<RejectedLine>> {
        let path = path.as_ref();
        let parsed = load_employees_with(path, self.seed_missing_file)?;

        self.employees = parsed.employees;
        self.path = path.to_path_buf();
        Ok(parsed.rejected)
    }

    /// Adds an employee and saves.
    ///
    /// Fails with [`DirectoryError::DuplicateId`] if the ID is taken, in
    /// which case nothing changes. If the save fails the employee stays in
    /// memory and the I/O error is returned.
    pub fn add(&mut self, employee: Employee) -> DirectoryResult<()> {
        if self.contains(employee.id()) {
            return Err(DirectoryError::DuplicateId {
                id: employee.id().to_string(),
            });
        }

        info!(employee_id = %employee.id(), kind = employee.kind().type_name(), "Adding employee");
        self.employees.push(employee);
        self.save_changes()
    }

    /// Removes the employee with `id`, saving if one was removed.
    ///
    /// Returns `Ok(false)` without touching the file when no employee matches.
    pub fn delete(&mut self, id: &str) -> DirectoryResult<bool> {
        let Some(index) = self.position(id) else {
            debug!(employee_id = id, "Delete requested for unknown employee");
            return Ok(false);
        };

        self.employees.remove(index);
        info!(employee_id = id, "Deleted employee");
        self.save_changes()?;
        Ok(true)
    }

    /// Looks up an employee by exact ID.
    pub fn find_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// Looks up an employee for modification.
    ///
    /// Changes made through the returned reference are visible immediately
    /// but are only persisted by [`Directory::save_changes`].
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id() == id)
    }

    /// Returns employees whose name contains `fragment`, ignoring case.
    pub fn find_by_name(&self, fragment: &str) -> Vec<&Employee> {
        let needle = fragment.to_lowercase();
        let matches: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|e| e.name().to_lowercase().contains(&needle))
            .collect();
        debug!(fragment, matches = matches.len(), "Searched by name");
        matches
    }

    /// Returns employees whose department equals `department`, ignoring case.
    pub fn find_by_department(&self, department: &str) -> Vec<&Employee> {
        let wanted = department.to_lowercase();
        self.employees
            .iter()
            .filter(|e| e.department().to_lowercase() == wanted)
            .collect()
    }

    /// Returns employees whose rating equals `rating`, ignoring case.
    pub fn find_by_performance_rating(&self, rating: &str) -> Vec<&Employee> {
        let wanted = rating.to_lowercase();
        self.employees
            .iter()
            .filter(|e| e.performance_rating().to_lowercase() == wanted)
            .collect()
    }

    /// Reorders the collection in place. Equal employees keep their order.
    ///
    /// Sorting does not save; call [`Directory::save_changes`] to persist
    /// the new order.
    pub fn sort(&mut self, criteria: SortCriteria) {
        debug!(?criteria, count = self.employees.len(), "Sorting employees");
        self.employees.sort_by(|a, b| criteria.compare(a, b));
    }

    /// Applies `update` to the employee with `id` and saves.
    ///
    /// Invalid updates change nothing and are not saved. An update with no
    /// fields set only checks that the employee exists.
    pub fn update(&mut self, id: &str, update: &EmployeeUpdate) -> DirectoryResult<()> {
        let employee = self.require_mut(id)?;
        if update.is_empty() {
            debug!(employee_id = id, "Empty update, nothing to save");
            return Ok(());
        }
        update.apply_to(employee)?;

        info!(employee_id = id, "Updated employee");
        self.save_changes()
    }

    /// Applies a performance action to the employee with `id`, logs it in
    /// their history with today's date, and saves.
    pub fn record_performance(
        &mut self,
        id: &str,
        action: PerformanceAction,
    ) -> DirectoryResult<()> {
        let today = Local::now().date_naive();
        let employee = self.require_mut(id)?;
        employee.record_performance(action, today)?;

        info!(employee_id = id, "Recorded performance action");
        self.save_changes()
    }

    /// Rewrites the bound data file with the current collection.
    pub fn save_changes(&self) -> DirectoryResult<()> {
        save_employees(&self.employees, &self.path).inspect_err(|err| {
            warn!(path = %self.path.display(), error = %err, "Failed to save employee data");
        })
    }

    /// Removes every employee from memory without saving.
    pub fn clear(&mut self) {
        self.employees.clear();
    }

    /// All employees in their current order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The data file this directory saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if an employee with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.id() == id)
    }

    fn require_mut(&mut self, id: &str) -> DirectoryResult<&mut Employee> {
        self.find_by_id_mut(id)
            .ok_or_else(|| DirectoryError::EmployeeNotFound { id: id.to_string() })
    }
}
