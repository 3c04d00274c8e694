/// Domain module containing core data types
///
/// This module defines the entities the analytics engine consumes (Habit,
/// HabitLog, UserProfile) and the immutable snapshot that bundles them per
/// user. These types are read-only inputs - the engine owns no persistence.

pub mod habit;
pub mod log;
pub mod snapshot;
pub mod types;
pub mod user;

// Re-export public types for easy access
pub use habit::*;
pub use log::*;
pub use snapshot::*;
pub use types::*;
pub use user::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
