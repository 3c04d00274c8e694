/// HabitLog entity for tracking daily habit outcomes
///
/// This module defines the HabitLog struct that represents one dated record of
/// a user's attempt at a habit, with a status, a free-form measurement payload,
/// and optional notes. The upstream store enforces at most one log per
/// (habit, user, calendar date).

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use crate::domain::{DomainError, HabitId, LogId, LogStatus, UserId};

/// One dated record of a habit attempt
///
/// The log date is a calendar date, not a timestamp - which day the attempt
/// was for. The creation timestamp records when the user actually logged it
/// and drives the time-of-day analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    /// Unique identifier for this log
    pub id: LogId,
    /// Which habit this log is for
    pub habit_id: HabitId,
    /// The user who logged it
    pub user_id: UserId,
    /// Which calendar day the attempt was for
    pub log_date: NaiveDate,
    /// Outcome of the attempt
    pub status: LogStatus,
    /// Habit-specific structured measurements (free-form)
    #[serde(default)]
    pub payload: Value,
    /// User's notes about this attempt
    pub notes: Option<String>,
    /// When this log was created
    pub created_at: DateTime<Utc>,
}

impl HabitLog {
    /// Create a new habit log with validation
    ///
    /// The creation timestamp is set to the current time. The log date must
    /// not be in the future and not more than one year in the past.
    pub fn new(
        habit_id: HabitId,
        user_id: UserId,
        log_date: NaiveDate,
        status: LogStatus,
        payload: Value,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_log_date(&log_date)?;
        Self::validate_notes(&notes)?;

        Ok(Self {
            id: LogId::new(),
            habit_id,
            user_id,
            log_date,
            status,
            payload,
            notes,
            created_at: Utc::now(),
        })
    }

    /// Create a log from existing data (used when loading from a collaborator)
    ///
    /// Assumes the data was validated upstream; mainly used by data sources
    /// and snapshot deserialization.
    pub fn from_parts(
        id: LogId,
        habit_id: HabitId,
        user_id: UserId,
        log_date: NaiveDate,
        status: LogStatus,
        payload: Value,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            habit_id,
            user_id,
            log_date,
            status,
            payload,
            notes,
            created_at,
        }
    }

    /// Whether this log records a completed attempt
    pub fn is_completed(&self) -> bool {
        self.status == LogStatus::Completed
    }

    /// The `completion_time` measurement from the payload, when present
    ///
    /// Completed logs may carry a numeric completion_time (minutes). Other
    /// statuses never do, and malformed values read as absent.
    pub fn completion_time(&self) -> Option<f64> {
        self.payload.get("completion_time").and_then(Value::as_f64)
    }

    /// Check if this log has notes
    pub fn has_notes(&self) -> bool {
        self.notes.as_ref().is_some_and(|n| !n.trim().is_empty())
    }

    // Validation helper methods

    /// Validate that the log date is not in the future and not ancient
    fn validate_log_date(date: &NaiveDate) -> Result<(), DomainError> {
        let today = Utc::now().naive_utc().date();

        if *date > today {
            return Err(DomainError::InvalidDate(
                "Cannot log habits for future dates".to_string()
            ));
        }

        let one_year_ago = today - chrono::Duration::days(365);
        if *date < one_year_ago {
            return Err(DomainError::InvalidDate(
                "Cannot log habits more than 1 year in the past".to_string()
            ));
        }

        Ok(())
    }

    /// Validate the optional notes field
    fn validate_notes(notes: &Option<String>) -> Result<(), DomainError> {
        if let Some(note_text) = notes {
            if note_text.len() > 500 {
                return Err(DomainError::InvalidValue {
                    message: "Notes cannot be longer than 500 characters".to_string()
                });
            }
        }
        Ok(())
    }
}
