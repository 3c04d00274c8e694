/// Habit entity and related functionality
///
/// This module defines the Habit struct that represents a recurring activity a
/// user tracks daily. Habits are owned by an external collaborator and are
/// read-only from the analytics engine's perspective.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{DomainError, HabitId, HabitKind, UserId};

/// A recurring user-defined activity tracked daily
///
/// Each habit has a display name, a kind (water, sleep, exercise, nutrition,
/// meditation), an owning user, and an active flag. Paused habits keep their
/// history but are excluded from the active-habit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// The user this habit belongs to
    pub user_id: UserId,
    /// Display name (e.g., "Morning Run", "8 glasses of water")
    pub name: String,
    /// What kind of activity this habit tracks
    pub kind: HabitKind,
    /// Whether this habit is currently active (can be paused)
    pub is_active: bool,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// This is the main constructor that validates the name and returns
    /// an error if validation fails.
    pub fn new(user_id: UserId, name: String, kind: HabitKind) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            user_id,
            name,
            kind,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    /// Create a habit from existing data (used when loading from a collaborator)
    ///
    /// This constructor assumes data is already validated upstream and is mainly
    /// used when deserializing snapshots fetched from a data source.
    pub fn from_parts(
        id: HabitId,
        user_id: UserId,
        name: String,
        kind: HabitKind,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            kind,
            is_active,
            created_at,
        }
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        Ok(())
    }
}
