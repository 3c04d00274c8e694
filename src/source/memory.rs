/// In-memory implementation of the habit data-source interface
///
/// Backed by plain vectors. Tests and embedding applications use it to feed
/// the engine without standing up a real store.

use crate::domain::{Habit, HabitLog, UserId, UserProfile};
use crate::source::{HabitDataSource, LogFilter, SourceError};

/// Vector-backed data source
///
/// Holds any number of users' data; fetches filter by owner. Insertion order
/// is preserved, which keeps snapshot log order predictable in tests.
#[derive(Debug, Default)]
pub struct InMemorySource {
    profiles: Vec<UserProfile>,
    habits: Vec<Habit>,
    logs: Vec<HabitLog>,
}

impl InMemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user profile
    pub fn add_profile(&mut self, profile: UserProfile) {
        self.profiles.push(profile);
    }

    /// Register a habit
    pub fn add_habit(&mut self, habit: Habit) {
        self.habits.push(habit);
    }

    /// Register a log record
    pub fn add_log(&mut self, log: HabitLog) {
        self.logs.push(log);
    }
}

impl HabitDataSource for InMemorySource {
    fn fetch_profile(&self, user_id: &UserId) -> Result<UserProfile, SourceError> {
        self.profiles
            .iter()
            .find(|p| &p.id == user_id)
            .cloned()
            .ok_or_else(|| SourceError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }

    fn fetch_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, SourceError> {
        Ok(self
            .habits
            .iter()
            .filter(|h| &h.user_id == user_id)
            .cloned()
            .collect())
    }

    fn fetch_logs(&self, user_id: &UserId, filter: &LogFilter) -> Result<Vec<HabitLog>, SourceError> {
        Ok(self
            .logs
            .iter()
            .filter(|l| &l.user_id == user_id && filter.matches(l))
            .cloned()
            .collect())
    }
}
