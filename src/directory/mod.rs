//! Directory service for the staff directory.
//!
//! This module contains the [`Directory`], which provides create, lookup,
//! update, delete, search and sort over employees, together with the
//! [`SortCriteria`] and [`EmployeeUpdate`] types its operations take.

mod service;
mod sort;
mod update;

pub use service::Directory;
pub use sort::{SortCriteria, compare_ids};
pub use update::EmployeeUpdate;
