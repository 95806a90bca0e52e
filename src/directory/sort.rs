//! Orderings used to sort the directory.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// The key a directory can be sorted by.
///
/// Every ordering is applied with a stable sort, so employees that compare
/// equal keep their previous relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriteria {
    /// Numeric value of the digits in the ID; IDs without digits go last.
    ById,
    /// Name, case-sensitive lexicographic.
    ByName,
    /// Department, case-sensitive lexicographic.
    ByDepartment,
    /// Calculated salary, highest first.
    BySalaryDescending,
    /// Performance rating, lexicographic.
    ByPerformanceRating,
}

impl SortCriteria {
    /// Every sort criteria, in menu order.
    pub const ALL: [SortCriteria; 5] = [
        SortCriteria::ById,
        SortCriteria::ByName,
        SortCriteria::ByDepartment,
        SortCriteria::BySalaryDescending,
        SortCriteria::ByPerformanceRating,
    ];

    /// Compares two employees under this criteria.
    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortCriteria::ById => compare_ids(a.id(), b.id()),
            SortCriteria::ByName => a.name().cmp(b.name()),
            SortCriteria::ByDepartment => a.department().cmp(b.department()),
            SortCriteria::BySalaryDescending => b.calculate_salary().cmp(&a.calculate_salary()),
            SortCriteria::ByPerformanceRating => {
                a.performance_rating().cmp(b.performance_rating())
            }
        }
    }
}

/// Compares IDs by the number formed from their digits.
///
/// `"E2"` sorts before `"E10"`; IDs with no digits sort after all others.
/// Digit strings are compared without converting to an integer, so long
/// IDs cannot overflow.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (id_number(a), id_number(b)) {
        (Some(x), Some(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Digits of the ID with leading zeros stripped.
fn id_number(id: &str) -> Option<String> {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.trim_start_matches('0').to_string())
}
