/// Immutable per-user snapshot consumed by the analytics engine
///
/// The engine never talks to a live store mid-computation: callers assemble a
/// snapshot of a user's habits and logs up front and pass it in by reference.
/// Concurrent analyses for different users each hold their own snapshot.

use serde::{Deserialize, Serialize};
use crate::domain::{Habit, HabitId, HabitLog, UserProfile};

/// Everything the engine needs to analyze one user
///
/// Logs are not required to be in any particular order; each analysis pass
/// sorts or groups what it needs. Nothing in the engine mutates the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHabitSnapshot {
    /// The user being analyzed, with collaborator-supplied leveling data
    pub user: UserProfile,
    /// All of the user's habits, active and paused
    pub habits: Vec<Habit>,
    /// All of the user's habit logs across every habit
    pub logs: Vec<HabitLog>,
}

impl UserHabitSnapshot {
    /// Build a snapshot from pre-fetched collections
    pub fn new(user: UserProfile, habits: Vec<Habit>, logs: Vec<HabitLog>) -> Self {
        Self { user, habits, logs }
    }

    /// All logs belonging to one habit, in snapshot order
    pub fn logs_for(&self, habit_id: &HabitId) -> Vec<&HabitLog> {
        self.logs.iter().filter(|l| &l.habit_id == habit_id).collect()
    }

    /// All completed logs across every habit, in snapshot order
    pub fn completed_logs(&self) -> Vec<&HabitLog> {
        self.logs.iter().filter(|l| l.is_completed()).collect()
    }
}
