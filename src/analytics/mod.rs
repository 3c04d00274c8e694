/// Analytics engine for aggregating habit log history
///
/// This module turns a per-user snapshot of habits and logs into structured
/// analytics: overall statistics, per-habit performance, temporal patterns,
/// streaks, short-term predictions, and rule-based recommendations. The
/// computation is pure - same snapshot, same clock, same seed, same result.

pub mod overall;
pub mod patterns;
pub mod performance;
pub mod predictions;
pub mod recommendations;
pub mod streaks;

pub use overall::OverallStats;
pub use patterns::TimePatterns;
pub use performance::{HabitPerformance, Trend};
pub use predictions::Predictions;
pub use recommendations::{Priority, Recommendation, RecommendationKind};
pub use streaks::StreakAnalysis;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use crate::domain::UserHabitSnapshot;

/// Complete analytics for one user
///
/// Six independently-computed sections, shaped for direct JSON serialization
/// by API callers. Result values are ephemeral - nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Aggregate statistics across every habit and log
    pub overall: OverallStats,
    /// One performance entry per habit
    pub habits: Vec<HabitPerformance>,
    /// When the user tends to complete habits
    pub time_patterns: TimePatterns,
    /// Current and historical streak figures
    pub streaks: StreakAnalysis,
    /// Short-term heuristics over the recent log window
    pub predictions: Predictions,
    /// Rule-based suggestions, in emission order
    pub recommendations: Vec<Recommendation>,
}

/// Analytics engine for processing habit data
///
/// The engine is stateless apart from the RNG that drives the prediction
/// jitter. Seed it for deterministic output in tests; the default constructor
/// seeds from entropy, which keeps the production prediction intentionally
/// approximate.
pub struct AnalyticsEngine {
    rng: StdRng,
}

impl AnalyticsEngine {
    /// Create an engine with an entropy-seeded jitter source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed jitter seed
    ///
    /// Two engines built from the same seed produce identical analyses for
    /// identical snapshots, including the jittered prediction field.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Analyze a snapshot as of the current instant
    pub fn analyze(&mut self, snapshot: &UserHabitSnapshot) -> Analysis {
        self.analyze_at(snapshot, Utc::now())
    }

    /// Analyze a snapshot as of an explicit instant
    ///
    /// "Today" for streak walking and the 30-day prediction window derive
    /// from `now`, so callers (and tests) can pin the clock.
    pub fn analyze_at(&mut self, snapshot: &UserHabitSnapshot, now: DateTime<Utc>) -> Analysis {
        let overall = overall::compute(snapshot, now);
        let habits = performance::compute(snapshot);
        let time_patterns = patterns::compute(snapshot);
        let streaks = streaks::compute(snapshot, now);
        let predictions = predictions::compute(snapshot, now, &mut self.rng);
        let recommendations = recommendations::evaluate(&overall, &time_patterns);

        tracing::debug!(
            "Analyzed user {}: {} logs across {} habits, {} recommendations",
            snapshot.user.id,
            overall.total_logs,
            overall.total_habits,
            recommendations.len()
        );

        Analysis {
            overall,
            habits,
            time_patterns,
            streaks,
            predictions,
            recommendations,
        }
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Completion rate as a 0-100 percentage, 0 when there is nothing to rate
pub(crate) fn rate_pct(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(completed as f64 * 100.0 / total as f64)
    }
}
