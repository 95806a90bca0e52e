//! Field-by-field employee edits.

use rust_decimal::Decimal;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Employee;

/// A set of optional field changes for one employee.
///
/// Fields left as `None` are not touched. Bonus and fine values replace the
/// accumulated totals rather than adding to them.
///
/// # Example
///
/// ```
/// use staff_directory::directory::EmployeeUpdate;
/// use staff_directory::models::Employee;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::regular("E002", "Jane Doe", "HR", Decimal::new(60000, 0))?;
/// let update = EmployeeUpdate {
///     department: Some("Finance".to_string()),
///     bonus: Some(Decimal::new(2500, 0)),
///     ..Default::default()
/// };
/// update.apply_to(&mut employee)?;
///
/// assert_eq!(employee.department(), "Finance");
/// assert_eq!(employee.calculate_salary(), Decimal::new(62500, 0));
/// # Ok::<(), staff_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    /// New name.
    pub name: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New base salary.
    pub base_salary: Option<Decimal>,
    /// New performance rating.
    pub performance_rating: Option<String>,
    /// Replacement bonus total.
    pub bonus: Option<Decimal>,
    /// Replacement fine total.
    pub fine: Option<Decimal>,
    /// New subordinate count; managers only.
    pub subordinates_managed: Option<u32>,
}

impl EmployeeUpdate {
    /// Returns true if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies every change, or none of them if any change is invalid.
    pub fn apply_to(&self, employee: &mut Employee) -> DirectoryResult<()> {
        let mut updated = employee.clone();

        if let Some(name) = &self.name {
            updated.set_name(name.as_str())?;
        }
        if let Some(department) = &self.department {
            updated.set_department(department.as_str())?;
        }
        if let Some(base_salary) = self.base_salary {
            updated.set_base_salary(base_salary)?;
        }
        if let Some(rating) = &self.performance_rating {
            if rating.trim().is_empty() {
                return Err(DirectoryError::invalid(
                    "performance_rating",
                    "cannot be empty",
                ));
            }
            updated.set_performance_rating(rating.as_str());
        }
        if let Some(bonus) = self.bonus {
            updated.set_bonus(bonus)?;
        }
        if let Some(fine) = self.fine {
            updated.set_fine(fine)?;
        }
        if let Some(count) = self.subordinates_managed {
            updated.set_subordinates_managed(count)?;
        }

        *employee = updated;
        Ok(())
    }
}
