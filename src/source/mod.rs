/// Data-source interface the analytics engine requires from collaborators
///
/// Persistence lives elsewhere; this module only defines the read-side
/// contract (fetch a user's profile, habits, and logs) plus an in-memory
/// implementation used by tests and embedders.

pub mod memory;

pub use memory::InMemorySource;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::domain::{Habit, HabitId, HabitLog, LogStatus, UserHabitSnapshot, UserId, UserProfile};

/// Errors a data source can surface to the caller
///
/// The engine itself never raises these - insufficient data degrades to
/// documented zero values inside the computation. Missing users and backend
/// failures are the collaborator's to report.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("No data available for user: {user_id}")]
    NoData { user_id: String },

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Criteria for narrowing a log fetch
///
/// All fields are optional; an empty filter matches every log. Sub-analyses
/// that only need a habit's logs or a date window pass a narrowed filter
/// instead of post-filtering a full fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogFilter {
    /// Only logs for this habit
    pub habit_id: Option<HabitId>,
    /// Only logs dated on or after this day
    pub from: Option<NaiveDate>,
    /// Only logs dated on or before this day
    pub to: Option<NaiveDate>,
    /// Only logs with this status
    pub status: Option<LogStatus>,
}

impl LogFilter {
    /// A filter that matches every log
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a single habit
    pub fn for_habit(mut self, habit_id: HabitId) -> Self {
        self.habit_id = Some(habit_id);
        self
    }

    /// Restrict to an inclusive date range
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Restrict to a single status
    pub fn with_status(mut self, status: LogStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether a log satisfies every set criterion
    pub fn matches(&self, log: &HabitLog) -> bool {
        if let Some(ref habit_id) = self.habit_id {
            if &log.habit_id != habit_id {
                return false;
            }
        }
        if let Some(from) = self.from {
            if log.log_date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if log.log_date > to {
                return false;
            }
        }
        if let Some(status) = self.status {
            if log.status != status {
                return false;
            }
        }
        true
    }
}

/// Trait defining the read-side interface for habit data
///
/// This is the seam between the pure analytics core and whatever store the
/// surrounding system uses. Implementations return owned collections so the
/// engine can hold an immutable snapshot with no live queries behind it.
pub trait HabitDataSource {
    /// Fetch a user's profile, including collaborator-computed leveling data
    fn fetch_profile(&self, user_id: &UserId) -> Result<UserProfile, SourceError>;

    /// Fetch all habits belonging to a user
    fn fetch_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, SourceError>;

    /// Fetch a user's logs matching the given filter
    fn fetch_logs(&self, user_id: &UserId, filter: &LogFilter) -> Result<Vec<HabitLog>, SourceError>;
}

/// Assemble a full snapshot for one user through a data source
///
/// This is the usual entry path for callers: fetch once, analyze the
/// resulting snapshot as many times as needed.
pub fn load_snapshot<S: HabitDataSource>(
    source: &S,
    user_id: &UserId,
) -> Result<UserHabitSnapshot, SourceError> {
    let user = source.fetch_profile(user_id)?;
    let habits = source.fetch_habits(user_id)?;
    let logs = source.fetch_logs(user_id, &LogFilter::all())?;

    tracing::debug!(
        "Loaded snapshot for {}: {} habits, {} logs",
        user_id,
        habits.len(),
        logs.len()
    );

    Ok(UserHabitSnapshot::new(user, habits, logs))
}
