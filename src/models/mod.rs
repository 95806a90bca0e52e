//! Core data models for the staff directory.
//!
//! This module contains the employee record, its kinds and pay rules, and
//! the performance records attached to each employee.

mod employee;
mod performance;

pub use employee::{
    DEFAULT_PERFORMANCE_RATING, Employee, EmployeeKind, INTERN_STIPEND,
    MANAGER_ALLOWANCE_PER_SUBORDINATE,
};
pub use performance::{COMMENT_SEPARATOR, Comment, PerformanceAction, PerformanceRecord};
