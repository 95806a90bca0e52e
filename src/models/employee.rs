//! Employee model and its pay rules.
//!
//! This module defines the [`Employee`] record shared by every kind of worker
//! and the [`EmployeeKind`] tag that selects the pay rule applied by
//! [`Employee::calculate_salary`].

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, DirectoryResult};

use super::performance::{PerformanceAction, PerformanceRecord};

/// Rating given to employees who have not been assessed yet.
pub const DEFAULT_PERFORMANCE_RATING: &str = "Not Rated";

/// Fixed stipend paid to interns regardless of their recorded base salary.
pub const INTERN_STIPEND: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// Allowance a manager receives per subordinate managed.
pub const MANAGER_ALLOWANCE_PER_SUBORDINATE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// The kind of worker, carrying any kind-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// A manager, paid an allowance per subordinate.
    Manager {
        /// Number of people reporting to this manager.
        subordinates_managed: u32,
    },
    /// A regular salaried employee.
    Regular,
    /// An intern on the fixed stipend.
    Intern,
}

impl EmployeeKind {
    /// The type name used for this kind in the data file.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_directory::models::EmployeeKind;
    ///
    /// assert_eq!(EmployeeKind::Regular.type_name(), "RegularEmployee");
    /// assert_eq!(EmployeeKind::Manager { subordinates_managed: 3 }.type_name(), "Manager");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            EmployeeKind::Manager { .. } => "Manager",
            EmployeeKind::Regular => "RegularEmployee",
            EmployeeKind::Intern => "Intern",
        }
    }
}

/// A worker tracked by the directory.
///
/// Fields are private so that the non-negativity of money amounts holds for
/// the lifetime of the record; all changes go through validating setters.
/// ID uniqueness is the directory's concern, not the model's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: String,
    name: String,
    department: String,
    base_salary: Decimal,
    performance_rating: String,
    bonus: Decimal,
    fine: Decimal,
    performance_history: Vec<PerformanceRecord>,
    #[serde(flatten)]
    kind: EmployeeKind,
}

impl Employee {
    /// Creates a manager.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_directory::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let mut manager = Employee::manager("M001", "Bob Johnson", "Management", Decimal::new(90000, 0), 10)?;
    /// manager.add_bonus(Decimal::new(15000, 0))?;
    /// assert_eq!(manager.calculate_salary(), Decimal::new(110000, 0));
    /// # Ok::<(), staff_directory::error::DirectoryError>(())
    /// ```
    pub fn manager(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: Decimal,
        subordinates_managed: u32,
    ) -> DirectoryResult<Self> {
        Self::new(
            id,
            name,
            department,
            base_salary,
            EmployeeKind::Manager {
                subordinates_managed,
            },
        )
    }

    /// Creates a regular employee.
    pub fn regular(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: Decimal,
    ) -> DirectoryResult<Self> {
        Self::new(id, name, department, base_salary, EmployeeKind::Regular)
    }

    /// Creates an intern.
    ///
    /// The base salary is recorded and persisted but does not affect pay:
    /// interns always earn [`INTERN_STIPEND`].
    pub fn intern(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: Decimal,
    ) -> DirectoryResult<Self> {
        Self::new(id, name, department, base_salary, EmployeeKind::Intern)
    }

    /// Creates an employee of any kind.
    ///
    /// Surrounding whitespace is trimmed from the ID, name and department.
    /// Fails with a validation error if the ID is blank or contains a comma,
    /// if the base salary is negative, or if the resulting salary would not
    /// fit in a [`Decimal`].
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: Decimal,
        kind: EmployeeKind,
    ) -> DirectoryResult<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(DirectoryError::invalid("id", "cannot be empty"));
        }
        if id.contains(',') {
            return Err(DirectoryError::invalid("id", "cannot contain ','"));
        }
        ensure_non_negative("base_salary", base_salary)?;
        ensure_salary_fits("base_salary", kind, base_salary, Decimal::ZERO, Decimal::ZERO)?;

        Ok(Self {
            id,
            name: name.into().trim().to_string(),
            department: department.into().trim().to_string(),
            base_salary,
            performance_rating: DEFAULT_PERFORMANCE_RATING.to_string(),
            bonus: Decimal::ZERO,
            fine: Decimal::ZERO,
            performance_history: Vec::new(),
            kind,
        })
    }

    /// Calculates total pay from the current state.
    ///
    /// - Manager: base salary + subordinates × 500 + bonus − fine
    /// - Regular: base salary + bonus − fine
    /// - Intern: 1500 stipend + bonus − fine
    ///
    /// Every mutator rejects values that would overflow this sum, so the
    /// result is always exact.
    pub fn calculate_salary(&self) -> Decimal {
        checked_salary(self.kind, self.base_salary, self.bonus, self.fine).unwrap_or(Decimal::MAX)
    }

    /// The employee's unique ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The recorded base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// The current performance rating.
    pub fn performance_rating(&self) -> &str {
        &self.performance_rating
    }

    /// Accumulated bonus.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }

    /// Accumulated fines.
    pub fn fine(&self) -> Decimal {
        self.fine
    }

    /// The kind of worker.
    pub fn kind(&self) -> EmployeeKind {
        self.kind
    }

    /// Subordinate count for managers, `None` for other kinds.
    pub fn subordinates_managed(&self) -> Option<u32> {
        match self.kind {
            EmployeeKind::Manager {
                subordinates_managed,
            } => Some(subordinates_managed),
            _ => None,
        }
    }

    /// Performance records in the order they were added.
    pub fn performance_history(&self) -> &[PerformanceRecord] {
        &self.performance_history
    }

    /// Renames the employee. Blank names are rejected; surrounding
    /// whitespace is trimmed.
    pub fn set_name(&mut self, name: impl Into<String>) -> DirectoryResult<()> {
        self.name = non_empty("name", name.into())?;
        Ok(())
    }

    /// Moves the employee to another department. Blank names are rejected;
    /// surrounding whitespace is trimmed.
    pub fn set_department(&mut self, department: impl Into<String>) -> DirectoryResult<()> {
        self.department = non_empty("department", department.into())?;
        Ok(())
    }

    /// Replaces the base salary. Negative values are rejected.
    pub fn set_base_salary(&mut self, base_salary: Decimal) -> DirectoryResult<()> {
        ensure_non_negative("base_salary", base_salary)?;
        ensure_salary_fits("base_salary", self.kind, base_salary, self.bonus, self.fine)?;
        self.base_salary = base_salary;
        Ok(())
    }

    /// Replaces the performance rating.
    ///
    /// Surrounding whitespace is trimmed and a blank rating resets to
    /// [`DEFAULT_PERFORMANCE_RATING`], matching how stored ratings load.
    pub fn set_performance_rating(&mut self, rating: impl Into<String>) {
        let rating = rating.into();
        let rating = rating.trim();
        self.performance_rating = if rating.is_empty() {
            DEFAULT_PERFORMANCE_RATING.to_string()
        } else {
            rating.to_string()
        };
    }

    /// Adds to the accumulated bonus. Negative amounts are rejected, as are
    /// amounts that would overflow the total.
    pub fn add_bonus(&mut self, amount: Decimal) -> DirectoryResult<()> {
        ensure_non_negative("bonus", amount)?;
        let bonus = self
            .bonus
            .checked_add(amount)
            .ok_or_else(|| too_large("bonus"))?;
        self.set_bonus(bonus)
    }

    /// Adds to the accumulated fines. Negative amounts are rejected, as are
    /// amounts that would overflow the total.
    pub fn add_fine(&mut self, amount: Decimal) -> DirectoryResult<()> {
        ensure_non_negative("fine", amount)?;
        let fine = self
            .fine
            .checked_add(amount)
            .ok_or_else(|| too_large("fine"))?;
        self.set_fine(fine)
    }

    /// Overrides the accumulated bonus. This is the only way to lower it.
    pub fn set_bonus(&mut self, bonus: Decimal) -> DirectoryResult<()> {
        ensure_non_negative("bonus", bonus)?;
        ensure_salary_fits("bonus", self.kind, self.base_salary, bonus, self.fine)?;
        self.bonus = bonus;
        Ok(())
    }

    /// Overrides the accumulated fines. This is the only way to lower them.
    pub fn set_fine(&mut self, fine: Decimal) -> DirectoryResult<()> {
        ensure_non_negative("fine", fine)?;
        ensure_salary_fits("fine", self.kind, self.base_salary, self.bonus, fine)?;
        self.fine = fine;
        Ok(())
    }

    /// Changes a manager's subordinate count.
    ///
    /// Fails with a validation error when the employee is not a manager.
    pub fn set_subordinates_managed(&mut self, count: u32) -> DirectoryResult<()> {
        match &mut self.kind {
            EmployeeKind::Manager {
                subordinates_managed,
            } => {
                ensure_salary_fits(
                    "subordinates_managed",
                    EmployeeKind::Manager {
                        subordinates_managed: count,
                    },
                    self.base_salary,
                    self.bonus,
                    self.fine,
                )?;
                *subordinates_managed = count;
                Ok(())
            }
            other => Err(DirectoryError::invalid(
                "subordinates_managed",
                format!("only managers have subordinates, not {}", other.type_name()),
            )),
        }
    }

    /// Appends a performance record to the history.
    pub fn add_performance_record(&mut self, record: PerformanceRecord) {
        self.performance_history.push(record);
    }

    /// Applies a performance action and logs it as a new record dated `date`.
    ///
    /// The record snapshots the rating held before the action. Reasons and
    /// ratings must be non-blank and amounts non-negative; on failure neither
    /// the employee nor the history is touched.
    pub fn record_performance(
        &mut self,
        action: PerformanceAction,
        date: NaiveDate,
    ) -> DirectoryResult<()> {
        let mut record = PerformanceRecord::with_date(&*self.id, &*self.performance_rating, date);

        match action {
            PerformanceAction::WarningLetter { reason } => {
                let reason = non_empty("reason", reason)?;
                record.issue_warning_letter(&reason);
            }
            PerformanceAction::AppreciationLetter { reason } => {
                let reason = non_empty("reason", reason)?;
                record.issue_appreciation_letter(&reason);
            }
            PerformanceAction::AwardBonus { amount } => {
                self.add_bonus(amount)?;
                record.award_bonus();
            }
            PerformanceAction::ApplyFine { amount, reason } => {
                let reason = non_empty("reason", reason)?;
                self.add_fine(amount)?;
                record.apply_fine(&reason);
            }
            PerformanceAction::UpdateRating { rating } => {
                let rating = non_empty("performance_rating", rating)?;
                self.set_performance_rating(rating.clone());
                record.set_monthly_rating(rating);
            }
        }

        self.performance_history.push(record);
        Ok(())
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Department: {}, Total Salary: ${:.2}, Performance Rating: {}, Type: {}",
            self.id,
            self.name,
            self.department,
            self.calculate_salary(),
            self.performance_rating,
            self.kind.type_name()
        )?;
        if let EmployeeKind::Manager {
            subordinates_managed,
        } = self.kind
        {
            write!(f, ", Subordinates: {}", subordinates_managed)?;
        }
        Ok(())
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> DirectoryResult<()> {
    if value < Decimal::ZERO {
        return Err(DirectoryError::invalid(field, "cannot be negative"));
    }
    Ok(())
}

fn non_empty(field: &str, value: String) -> DirectoryResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DirectoryError::invalid(field, "cannot be empty"));
    }
    Ok(value.to_string())
}

fn too_large(field: &str) -> DirectoryError {
    DirectoryError::invalid(field, "amount too large")
}

/// Total pay for the given state, or `None` when it overflows [`Decimal`].
fn checked_salary(
    kind: EmployeeKind,
    base_salary: Decimal,
    bonus: Decimal,
    fine: Decimal,
) -> Option<Decimal> {
    let base = match kind {
        EmployeeKind::Manager {
            subordinates_managed,
        } => Decimal::from(subordinates_managed)
            .checked_mul(MANAGER_ALLOWANCE_PER_SUBORDINATE)?
            .checked_add(base_salary)?,
        EmployeeKind::Regular => base_salary,
        EmployeeKind::Intern => INTERN_STIPEND,
    };
    base.checked_add(bonus)?.checked_sub(fine)
}

fn ensure_salary_fits(
    field: &str,
    kind: EmployeeKind,
    base_salary: Decimal,
    bonus: Decimal,
    fine: Decimal,
) -> DirectoryResult<()> {
    checked_salary(kind, base_salary, bonus, fine)
        .map(|_| ())
        .ok_or_else(|| too_large(field))
}
