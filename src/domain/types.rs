/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitKind, LogStatus, and the
/// ID newtypes that are used by Habit, HabitLog, and other domain entities.

use serde::{Deserialize, Serialize};
use chrono::Weekday;
use uuid::Uuid;
use std::fmt;

/// Unique identifier for a user
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a user ID where a habit ID is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a user ID from a string (useful when loading external data)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a habit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a habit log record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(pub Uuid);

impl LogId {
    /// Generate a new random log ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a log ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The kind of activity a habit tracks
///
/// Habits are typed so the payload on their log records can carry
/// kind-specific measurements (glasses of water, hours slept, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    /// Hydration tracking
    Water,
    /// Sleep duration and quality
    Sleep,
    /// Physical exercise
    Exercise,
    /// Meals and diet
    Nutrition,
    /// Meditation and mindfulness practice
    Meditation,
}

impl HabitKind {
    /// Get the display name for this habit kind
    pub fn display_name(&self) -> &'static str {
        match self {
            HabitKind::Water => "Water",
            HabitKind::Sleep => "Sleep",
            HabitKind::Exercise => "Exercise",
            HabitKind::Nutrition => "Nutrition",
            HabitKind::Meditation => "Meditation",
        }
    }
}

/// Outcome recorded on a single habit log
///
/// A missing log for a day is not the same thing as an explicit Missed
/// record - gaps carry no record at all, and the analytics layer handles both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// The habit was fully completed that day
    Completed,
    /// The habit was attempted but not finished
    Partial,
    /// The user explicitly marked the day as missed
    Missed,
}

impl LogStatus {
    /// String form used in serialized output and filters
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Completed => "completed",
            LogStatus::Partial => "partial",
            LogStatus::Missed => "missed",
        }
    }
}

/// All weekdays in Monday-first order
///
/// Distribution maps are keyed by weekday name; iterating in this fixed order
/// gives peak/best/worst selection a stable tie-break.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name for a weekday (e.g. "Monday")
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
