//! Line-oriented text codec for employee records.
//!
//! Each record is one comma-separated line:
//!
//! ```text
//! Type,Name,ID,Department,BaseSalary[,PerformanceRating[,Bonus[,Fine[,SubordinatesManaged]]]]
//! ```
//!
//! The fifth and later fields are optional; `SubordinatesManaged` is only
//! written for managers. Values are not escaped, so commas inside names or
//! departments will split the line.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{DEFAULT_PERFORMANCE_RATING, Employee, EmployeeKind};

/// Header line written at the top of every data file.
pub const HEADER: &str = "Type,Name,ID,Department,BaseSalary,PerformanceRating,Bonus,Fine";

/// Number of fields every record must carry.
const REQUIRED_FIELDS: usize = 5;

const RATING_FIELD: usize = 5;
const BONUS_FIELD: usize = 6;
const FINE_FIELD: usize = 7;
const SUBORDINATES_FIELD: usize = 8;

/// A stored line that could not be turned into an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// One-based line number within the file.
    pub line_number: usize,
    /// The raw line as read.
    pub line: String,
    /// Why the line was rejected.
    pub reason: String,
}

/// The outcome of parsing a whole data file.
#[derive(Debug, Clone, Default)]
pub struct ParsedEmployees {
    /// Employees successfully read, in file order.
    pub employees: Vec<Employee>,
    /// Lines that were skipped because they were malformed.
    pub rejected: Vec<RejectedLine>,
}

/// Parses the full contents of a data file.
///
/// The first line is always treated as the header. Blank lines and lines
/// whose type is not one of `Manager`, `RegularEmployee` or `Intern` are
/// skipped silently. Malformed lines, and lines repeating an earlier ID, are
/// logged and collected in [`ParsedEmployees::rejected`]; parsing always
/// continues with the next line.
///
/// # Example
///
/// ```
/// use staff_directory::storage::parse_employees;
///
/// let text = "Type,Name,ID,Department,BaseSalary,PerformanceRating,Bonus,Fine\n\
///             RegularEmployee,Jane Doe,E002,HR,60000.0,Good,500.0,0.0\n\
///             RegularEmployee,Bad Line,E004,HR,sixty,Good,0,0\n";
///
/// let parsed = parse_employees(text);
/// assert_eq!(parsed.employees.len(), 1);
/// assert_eq!(parsed.rejected[0].line_number, 3);
/// ```
pub fn parse_employees(content: &str) -> ParsedEmployees {
    let mut parsed = ParsedEmployees::default();
    let mut seen_ids = HashSet::new();
    let mut lines = content.lines().enumerate();

    if let Some((_, header)) = lines.next() {
        if header.trim() != HEADER {
            warn!(header = %header.trim(), "Unexpected header line, skipping it anyway");
        }
    }

    for (index, line) in lines {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let result = parse_line(line, line_number).and_then(|employee| match employee {
            Some(employee) if !seen_ids.insert(employee.id().to_string()) => {
                Err(DirectoryError::DuplicateId {
                    id: employee.id().to_string(),
                })
            }
            other => Ok(other),
        });

        match result {
            Ok(Some(employee)) => parsed.employees.push(employee),
            Ok(None) => {}
            Err(err) => {
                warn!(line_number, error = %err, "Skipping malformed employee line");
                parsed.rejected.push(RejectedLine {
                    line_number,
                    line: line.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    parsed
}

/// Parses a single record line.
///
/// Returns `Ok(None)` when the type column names no known kind. Values the
/// model rejects, including amounts whose total pay would overflow, fail
/// the line.
pub fn parse_line(line: &str, line_number: usize) -> DirectoryResult<Option<Employee>> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() < REQUIRED_FIELDS {
        return Err(DirectoryError::ParseError {
            line_number,
            message: format!(
                "expected at least {} fields, found {}",
                REQUIRED_FIELDS,
                fields.len()
            ),
        });
    }

    let kind = match fields[0] {
        "Manager" => EmployeeKind::Manager {
            subordinates_managed: match optional_field(&fields, SUBORDINATES_FIELD) {
                Some(raw) => parse_count("SubordinatesManaged", raw, line_number)?,
                None => 0,
            },
        },
        "RegularEmployee" => EmployeeKind::Regular,
        "Intern" => EmployeeKind::Intern,
        other => {
            debug!(line_number, employee_type = other, "Skipping line with unknown type");
            return Ok(None);
        }
    };

    let base_salary = parse_amount("BaseSalary", fields[4], line_number)?;
    let bonus = optional_field(&fields, BONUS_FIELD)
        .map(|raw| parse_amount("Bonus", raw, line_number))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    let fine = optional_field(&fields, FINE_FIELD)
        .map(|raw| parse_amount("Fine", raw, line_number))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    let rating = optional_field(&fields, RATING_FIELD).unwrap_or(DEFAULT_PERFORMANCE_RATING);

    let mut employee = Employee::new(fields[2], fields[1], fields[3], base_salary, kind)?;
    employee.set_performance_rating(rating);
    employee.add_bonus(bonus)?;
    employee.add_fine(fine)?;

    Ok(Some(employee))
}

/// Renders one employee as a record line (without a trailing newline).
pub fn format_employee(employee: &Employee) -> String {
    let mut line = format!(
        "{},{},{},{},{},{},{},{}",
        employee.kind().type_name(),
        employee.name(),
        employee.id(),
        employee.department(),
        employee.base_salary(),
        employee.performance_rating(),
        employee.bonus(),
        employee.fine()
    );
    if let Some(count) = employee.subordinates_managed() {
        // Writing to a String cannot fail.
        let _ = write!(line, ",{}", count);
    }
    line
}

/// Renders a complete data file: header followed by one line per employee.
pub fn render_employees(employees: &[Employee]) -> String {
    let mut content = String::with_capacity(HEADER.len() + 1 + employees.len() * 64);
    content.push_str(HEADER);
    content.push('\n');
    for employee in employees {
        content.push_str(&format_employee(employee));
        content.push('\n');
    }
    content
}

// Empty trailing fields count as absent.
fn optional_field<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
    fields.get(index).copied().filter(|raw| !raw.is_empty())
}

fn parse_amount(field: &str, raw: &str, line_number: usize) -> DirectoryResult<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| DirectoryError::ParseError {
            line_number,
            message: format!("invalid {} '{}'", field, raw),
        })
}

fn parse_count(field: &str, raw: &str, line_number: usize) -> DirectoryResult<u32> {
    raw.parse::<u32>().map_err(|_| DirectoryError::ParseError {
        line_number,
        message: format!("invalid {} '{}'", field, raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn with_header(body: &str) -> String {
        format!("{}\n{}", HEADER, body)
    }

    #[test]
    fn test_parse_full_manager_line() {
        let employee = parse_line("Manager,John Smith,E001,IT,85000.0,Outstanding,1000.0,0.0,4", 2)
            .unwrap()
            .unwrap();

        assert_eq!(employee.id(), "E001");
        assert_eq!(employee.name(), "John Smith");
        assert_eq!(employee.department(), "IT");
        assert_eq!(employee.base_salary(), dec("85000.0"));
        assert_eq!(employee.performance_rating(), "Outstanding");
        assert_eq!(employee.bonus(), dec("1000"));
        assert_eq!(employee.fine(), Decimal::ZERO);
        assert_eq!(employee.subordinates_managed(), Some(4));
        assert_eq!(employee.calculate_salary(), dec("88000"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let employee = parse_line(" RegularEmployee , Jane Doe , E002 , HR , 60000 ", 2)
            .unwrap()
            .unwrap();

        assert_eq!(employee.kind(), EmployeeKind::Regular);
        assert_eq!(employee.name(), "Jane Doe");
        assert_eq!(employee.id(), "E002");
        assert_eq!(employee.base_salary(), dec("60000"));
    }

    #[test]
    fn test_optional_fields_default() {
        let employee = parse_line("Manager,John Smith,E001,IT,85000", 2)
            .unwrap()
            .unwrap();

        assert_eq!(employee.performance_rating(), "Not Rated");
        assert_eq!(employee.bonus(), Decimal::ZERO);
        assert_eq!(employee.fine(), Decimal::ZERO);
        assert_eq!(employee.subordinates_managed(), Some(0));
    }

    #[test]
    fn test_empty_trailing_fields_count_as_absent() {
        let employee = parse_line("Intern,Peter Parker,E003,Marketing,1500,,,", 2)
            .unwrap()
            .unwrap();

        assert_eq!(employee.performance_rating(), "Not Rated");
        assert_eq!(employee.bonus(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_type_is_skipped() {
        let result = parse_line("Contractor,Sam Lee,C001,IT,40000", 2).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_type_is_case_sensitive() {
        assert!(parse_line("manager,Sam Lee,M009,IT,40000", 2).unwrap().is_none());
    }

    #[test]
    fn test_too_few_fields_is_error() {
        let result = parse_line("Intern,Peter Parker,E003", 7);
        match result {
            Err(DirectoryError::ParseError {
                line_number,
                message,
            }) => {
                assert_eq!(line_number, 7);
                assert!(message.contains("found 3"));
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_salary_is_error() {
        let result = parse_line("RegularEmployee,Jane Doe,E002,HR,sixty", 3);
        match result {
            Err(DirectoryError::ParseError { message, .. }) => {
                assert_eq!(message, "invalid BaseSalary 'sixty'");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_subordinates_is_error() {
        let result = parse_line("Manager,John Smith,E001,IT,85000,Good,0,0,-3", 2);
        assert!(matches!(result, Err(DirectoryError::ParseError { .. })));
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        let result = parse_line("RegularEmployee,Jane Doe,E002,HR,60000,Good,-5,0", 2);
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_scientific_notation_amount_is_accepted() {
        let employee = parse_line("RegularEmployee,Jane Doe,E002,HR,1.2E7", 2)
            .unwrap()
            .unwrap();
        assert_eq!(employee.base_salary(), dec("12000000"));
    }

    #[test]
    fn test_salary_overflow_is_rejected() {
        let result = parse_line(
            "RegularEmployee,Big,E1,IT,79228162514264337593543950335,Good,1,0",
            2,
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid employee field 'bonus': amount too large"
        );

        let result = parse_line("Manager,Big,M1,IT,79228162514264337593543950335,Good,0,0,1", 2);
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_employees_skips_overflowing_line() {
        let content = with_header(
            "RegularEmployee,Big,E1,IT,79228162514264337593543950335,Good,1,0\n\
             RegularEmployee,Max,E2,IT,79228162514264337593543950335,Good,0,0\n",
        );

        let parsed = parse_employees(&content);

        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line_number, 2);
        assert_eq!(parsed.employees.len(), 1);
        assert_eq!(parsed.employees[0].calculate_salary(), Decimal::MAX);
    }

    #[test]
    fn test_parse_employees_skips_bad_line_and_continues() {
        let content = with_header(
            "Manager,John Smith,E001,IT,85000.0,Outstanding,1000.0,0.0\n\
             RegularEmployee,Jane Doe,E002,HR,not-a-number,Good,500.0,0.0\n\
             Intern,Peter Parker,E003,Marketing,1500.0,Good,0.0,0.0\n",
        );

        let parsed = parse_employees(&content);

        let ids: Vec<&str> = parsed.employees.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["E001", "E003"]);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line_number, 3);
        assert!(parsed.rejected[0].line.contains("not-a-number"));
    }

    #[test]
    fn test_parse_employees_skips_blank_and_unknown_lines_silently() {
        let content = with_header(
            "\n\
             Contractor,Sam Lee,C001,IT,40000\n\
             Intern,Peter Parker,E003,Marketing,1500.0\n",
        );

        let parsed = parse_employees(&content);
        assert_eq!(parsed.employees.len(), 1);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_employees_rejects_repeated_id() {
        let content = with_header(
            "RegularEmployee,Jane Doe,E002,HR,60000\n\
             Intern,Jane Clone,E002,HR,1500\n",
        );

        let parsed = parse_employees(&content);
        assert_eq!(parsed.employees.len(), 1);
        assert_eq!(parsed.employees[0].name(), "Jane Doe");
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line_number, 3);
    }

    #[test]
    fn test_first_line_is_always_skipped() {
        let parsed = parse_employees("RegularEmployee,Jane Doe,E002,HR,60000\n");
        assert!(parsed.employees.is_empty());
    }

    #[test]
    fn test_parse_empty_content() {
        let parsed = parse_employees("");
        assert!(parsed.employees.is_empty());
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_format_manager_appends_subordinates() {
        let mut manager =
            Employee::manager("M001", "Bob Johnson", "Management", dec("90000"), 10).unwrap();
        manager.add_bonus(dec("15000")).unwrap();
        manager.set_performance_rating("Good");

        assert_eq!(
            format_employee(&manager),
            "Manager,Bob Johnson,M001,Management,90000,Good,15000,0,10"
        );
    }

    #[test]
    fn test_format_regular_and_intern() {
        let regular = Employee::regular("E002", "Jane Doe", "HR", dec("60000.0")).unwrap();
        let intern = Employee::intern("I001", "Grace Hall", "IT", dec("25000")).unwrap();

        assert_eq!(
            format_employee(&regular),
            "RegularEmployee,Jane Doe,E002,HR,60000.0,Not Rated,0,0"
        );
        assert_eq!(
            format_employee(&intern),
            "Intern,Grace Hall,I001,IT,25000,Not Rated,0,0"
        );
    }

    #[test]
    fn test_render_then_parse_preserves_records() {
        let mut manager = Employee::manager("M001", "Bob", "Ops", dec("90000"), 10).unwrap();
        manager.add_bonus(dec("15000")).unwrap();
        let mut regular = Employee::regular("E004", "Alice", "IT", dec("65000")).unwrap();
        regular.add_fine(dec("12.34")).unwrap();
        let intern = Employee::intern("I001", "Grace", "IT", dec("25000")).unwrap();
        let employees = vec![manager, regular, intern];

        let content = render_employees(&employees);
        assert!(content.starts_with(HEADER));
        assert!(content.ends_with('\n'));

        let parsed = parse_employees(&content);
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.employees, employees);
    }
}
