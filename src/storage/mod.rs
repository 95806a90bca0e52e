//! Flat-file persistence for the staff directory.
//!
//! This module turns a list of employees into the comma-separated data file
//! format and back, and handles reading, seeding and rewriting the file.
//!
//! # Example
//!
//! ```no_run
//! use staff_directory::storage::{load_employees, save_employees};
//!
//! let employees = load_employees("employee_data.csv")?;
//! save_employees(&employees, "backup.csv")?;
//! # Ok::<(), staff_directory::error::DirectoryError>(())
//! ```

mod codec;
mod file;

pub use codec::{
    HEADER, ParsedEmployees, RejectedLine, format_employee, parse_employees, parse_line,
    render_employees,
};
pub use file::{
    DEFAULT_DATA_FILE, SEED_CONTENT, load_employees, load_employees_with, save_employees,
};
