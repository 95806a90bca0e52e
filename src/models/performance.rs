//! Performance tracking records.
//!
//! A [`PerformanceRecord`] captures one performance-management event for an
//! employee: the rating at the time, which letters or pay adjustments were
//! issued, and a dated comment log.

use std::fmt;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Separator placed between comments when the log is rendered as one string.
pub const COMMENT_SEPARATOR: &str = "; ";

/// A single dated entry in a performance record's comment log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// The day the comment was written.
    pub date: NaiveDate,
    /// The comment text.
    pub text: String,
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.date, self.text)
    }
}

/// A performance-management action taken against an employee.
///
/// Actions are applied through [`Employee::record_performance`], which
/// updates the employee and appends a new [`PerformanceRecord`] describing
/// what happened.
///
/// [`Employee::record_performance`]: super::Employee::record_performance
#[derive(Debug, Clone, PartialEq)]
pub enum PerformanceAction {
    /// Issue a warning letter for the given reason.
    WarningLetter {
        /// Why the letter was issued.
        reason: String,
    },
    /// Issue an appreciation letter for the given reason.
    AppreciationLetter {
        /// Why the letter was issued.
        reason: String,
    },
    /// Add the amount to the employee's bonus.
    AwardBonus {
        /// Bonus amount; must not be negative.
        amount: Decimal,
    },
    /// Add the amount to the employee's fines.
    ApplyFine {
        /// Fine amount; must not be negative.
        amount: Decimal,
        /// Why the fine was applied.
        reason: String,
    },
    /// Replace the employee's performance rating.
    UpdateRating {
        /// The new rating.
        rating: String,
    },
}

/// One performance-management event attached to a single employee.
///
/// The record refers to its employee by ID only; ownership lives with the
/// employee's performance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceRecord {
    employee_id: String,
    monthly_rating: String,
    warning_letter: bool,
    appreciation_letter: bool,
    bonus_awarded: bool,
    fine_applied: bool,
    date: NaiveDate,
    comments: Vec<Comment>,
}

impl PerformanceRecord {
    /// Creates a record dated today with all flags cleared.
    pub fn new(employee_id: impl Into<String>, monthly_rating: impl Into<String>) -> Self {
        Self::with_date(employee_id, monthly_rating, Local::now().date_naive())
    }

    /// Creates a record for an explicit date with all flags cleared.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_directory::models::PerformanceRecord;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    /// let mut record = PerformanceRecord::with_date("E001", "Good", date);
    /// record.issue_warning_letter("Late to standup");
    /// record.award_bonus();
    ///
    /// assert!(record.warning_letter());
    /// assert_eq!(
    ///     record.comments_display(),
    ///     "[2025-03-01] Warning Letter Issued: Late to standup; [2025-03-01] Bonus Awarded"
    /// );
    /// ```
    pub fn with_date(
        employee_id: impl Into<String>,
        monthly_rating: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            monthly_rating: monthly_rating.into(),
            warning_letter: false,
            appreciation_letter: false,
            bonus_awarded: false,
            fine_applied: false,
            date,
            comments: Vec::new(),
        }
    }

    /// The ID of the employee this record belongs to.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The rating snapshot held by this record.
    pub fn monthly_rating(&self) -> &str {
        &self.monthly_rating
    }

    /// Whether a warning letter was issued.
    pub fn warning_letter(&self) -> bool {
        self.warning_letter
    }

    /// Whether an appreciation letter was issued.
    pub fn appreciation_letter(&self) -> bool {
        self.appreciation_letter
    }

    /// Whether a bonus was awarded.
    pub fn bonus_awarded(&self) -> bool {
        self.bonus_awarded
    }

    /// Whether a fine was applied.
    pub fn fine_applied(&self) -> bool {
        self.fine_applied
    }

    /// The day the record was created.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The comment log, oldest first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Renders the comment log as a single string joined by [`COMMENT_SEPARATOR`].
    pub fn comments_display(&self) -> String {
        self.comments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(COMMENT_SEPARATOR)
    }

    /// Replaces the rating snapshot.
    pub fn set_monthly_rating(&mut self, rating: impl Into<String>) {
        self.monthly_rating = rating.into();
    }

    /// Flags a warning letter and logs the reason.
    pub fn issue_warning_letter(&mut self, reason: &str) {
        self.warning_letter = true;
        self.add_comment(format!("Warning Letter Issued: {}", reason));
    }

    /// Flags an appreciation letter and logs the reason.
    pub fn issue_appreciation_letter(&mut self, reason: &str) {
        self.appreciation_letter = true;
        self.add_comment(format!("Appreciation Letter Issued: {}", reason));
    }

    /// Flags that a bonus was awarded.
    pub fn award_bonus(&mut self) {
        self.bonus_awarded = true;
        self.add_comment("Bonus Awarded".to_string());
    }

    /// Flags that a fine was applied and logs the reason.
    pub fn apply_fine(&mut self, reason: &str) {
        self.fine_applied = true;
        self.add_comment(format!("Fine Applied: {}", reason));
    }

    // Comments carry the record's own date.
    fn add_comment(&mut self, text: String) {
        self.comments.push(Comment {
            date: self.date,
            text,
        });
    }
}

impl fmt::Display for PerformanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Performance Record [Date: {}, Rating: {}, Warnings: {}, Appreciations: {}, Bonus: {}, Fine: {}]",
            self.date,
            self.monthly_rating,
            self.warning_letter,
            self.appreciation_letter,
            self.bonus_awarded,
            self.fine_applied
        )
    }
}
