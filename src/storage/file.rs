//! Reading and writing the employee data file.
//!
//! Saves always rewrite the whole file in place. There is no temporary file
//! or rename step, so a crash mid-write can leave a truncated file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Employee;

use super::codec::{ParsedEmployees, parse_employees, render_employees};

/// File name used when no other data file is configured.
pub const DEFAULT_DATA_FILE: &str = "employee_data.csv";

/// Contents written when a data file is opened that does not exist yet.
pub const SEED_CONTENT: &str = "\
Type,Name,ID,Department,BaseSalary,PerformanceRating,Bonus,Fine
Manager,John Smith,E001,IT,85000.0,Outstanding,1000.0,0.0
RegularEmployee,Jane Doe,E002,HR,60000.0,Good,500.0,0.0
Intern,Peter Parker,E003,Marketing,1500.0,Good,0.0,0.0
";

/// Loads employees from `path`, seeding the file first if it is missing.
///
/// Malformed lines are logged and skipped; only I/O failures are returned.
///
/// # Example
///
/// ```no_run
/// use staff_directory::storage::load_employees;
///
/// let employees = load_employees("employee_data.csv")?;
/// println!("Loaded {} employees", employees.len());
/// # Ok::<(), staff_directory::error::DirectoryError>(())
/// ```
pub fn load_employees<P: AsRef<Path>>(path: P) -> DirectoryResult<Vec<Employee>> {
    load_employees_with(path, true).map(|parsed| parsed.employees)
}

/// Loads employees from `path`, also reporting which lines were skipped.
///
/// When `seed_missing` is true and the file does not exist, it is created
/// with [`SEED_CONTENT`] and then read back. When false, a missing file is
/// an I/O error.
pub fn load_employees_with<P: AsRef<Path>>(
    path: P,
    seed_missing: bool,
) -> DirectoryResult<ParsedEmployees> {
    let path = path.as_ref();

    if seed_missing && !path.exists() {
        debug!(path = %path.display(), "Data file missing, writing seed records");
        fs::write(path, SEED_CONTENT).map_err(|e| DirectoryError::io(path, e))?;
    }

    let content = fs::read_to_string(path).map_err(|e| DirectoryError::io(path, e))?;
    let parsed = parse_employees(&content);

    info!(
        path = %path.display(),
        loaded = parsed.employees.len(),
        rejected = parsed.rejected.len(),
        "Loaded employee data"
    );

    Ok(parsed)
}

/// Writes every employee to `path`, replacing any previous contents.
pub fn save_employees<P: AsRef<Path>>(employees: &[Employee], path: P) -> DirectoryResult<()> {
    let path = path.as_ref();

    fs::write(path, render_employees(employees)).map_err(|e| DirectoryError::io(path, e))?;

    info!(path = %path.display(), saved = employees.len(), "Saved employee data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::HEADER;
    use rust_decimal::Decimal;
    use std::io;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn is_not_found(error: &DirectoryError) -> bool {
        matches!(error, DirectoryError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    #[test]
    fn test_seed_content_starts_with_header() {
        assert_eq!(SEED_CONTENT.lines().next(), Some(HEADER));
    }

    #[test]
    fn test_missing_file_is_seeded_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.csv");

        let employees = load_employees(&path).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), SEED_CONTENT);
        let ids: Vec<&str> = employees.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["E001", "E002", "E003"]);
        assert_eq!(employees[0].calculate_salary(), dec("86000"));
        assert_eq!(employees[2].calculate_salary(), dec("1500"));
    }

    #[test]
    fn test_missing_file_without_seeding_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        let error = load_employees_with(&path, false).unwrap_err();

        assert!(is_not_found(&error));
        assert!(!path.exists());
    }

    #[test]
    fn test_uncreatable_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("employees.csv");

        let error = load_employees(&path).unwrap_err();
        assert!(matches!(error, DirectoryError::Io { .. }));
    }

    #[test]
    fn test_save_rewrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(&path, "stale contents that must disappear\n").unwrap();

        let employees = vec![Employee::regular("E010", "Eva Green", "Marketing", dec("68000")).unwrap()];
        save_employees(&employees, &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{}\nRegularEmployee,Eva Green,E010,Marketing,68000,Not Rated,0,0\n", HEADER)
        );
    }

    #[test]
    fn test_save_empty_list_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.csv");

        save_employees(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", HEADER));
        assert!(load_employees(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("employees.csv");

        let error = save_employees(&[], &path).unwrap_err();
        assert!(is_not_found(&error));
    }

    #[test]
    fn test_load_reports_rejected_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            format!(
                "{}\nRegularEmployee,Jane Doe,E002,HR,abc\nIntern,Peter Parker,E003,Marketing,1500\n",
                HEADER
            ),
        )
        .unwrap();

        let parsed = load_employees_with(&path, true).unwrap();
        assert_eq!(parsed.employees.len(), 1);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line_number, 2);
    }
}
