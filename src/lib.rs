/// Public library interface for the habit analytics engine
///
/// This crate aggregates a user's habit log history into structured
/// analytics: overall statistics, per-habit performance, time-of-day
/// patterns, streaks, short-term predictions, and rule-based
/// recommendations. Persistence, authentication, and delivery live in
/// external collaborators; the engine only consumes read-only snapshots.

use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod source;

// Re-export public modules and types
pub use analytics::{
    Analysis, AnalyticsEngine, HabitPerformance, OverallStats, Predictions, Priority,
    Recommendation, RecommendationKind, StreakAnalysis, TimePatterns, Trend,
};
pub use domain::*;
pub use source::{load_snapshot, HabitDataSource, InMemorySource, LogFilter, SourceError};

/// Errors that can occur while assembling input for the engine
///
/// The analysis itself never fails - insufficient data degrades to zero
/// values. These cover the paths around it: fetching from a data source,
/// loading snapshot files, and serializing results.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Analyze a user straight from a data source
///
/// Convenience wrapper for the common path: load a snapshot through the
/// collaborator interface, then run the engine over it.
pub fn analyze_user<S: HabitDataSource>(
    source: &S,
    user_id: &UserId,
    engine: &mut AnalyticsEngine,
) -> Result<Analysis, EngineError> {
    let snapshot = load_snapshot(source, user_id)?;
    Ok(engine.analyze(&snapshot))
}
