/// Rule-based recommendations derived from the other analysis sections
///
/// Rules fire independently in a fixed order; zero or more recommendations
/// come out and there is no dedup or re-ranking beyond emission order.

use serde::{Deserialize, Serialize};
use crate::analytics::{OverallStats, TimePatterns};

/// How urgently a recommendation should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Which rule produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Overall completion rate is below the 70% target
    CompletionRate,
    /// Logging cadence is irregular
    Consistency,
    /// A peak completion hour exists to plan around
    Schedule,
}

/// A single actionable suggestion for the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Which rule fired
    pub kind: RecommendationKind,
    /// Short headline
    pub title: String,
    /// Human-readable explanation with the relevant numbers
    pub description: String,
    /// Surfacing urgency
    pub priority: Priority,
}

/// Thresholds the rules test against
const COMPLETION_RATE_TARGET: f64 = 70.0;
const CONSISTENCY_TARGET: f64 = 0.6;

pub(crate) fn evaluate(overall: &OverallStats, patterns: &TimePatterns) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if overall.completion_rate < COMPLETION_RATE_TARGET {
        recommendations.push(Recommendation {
            kind: RecommendationKind::CompletionRate,
            title: "Improve your completion rate".to_string(),
            description: format!(
                "You complete {:.1}% of your logged habits. Aim for {:.0}% by starting with your easiest habit each day.",
                overall.completion_rate, COMPLETION_RATE_TARGET
            ),
            priority: Priority::High,
        });
    }

    if overall.consistency_score < CONSISTENCY_TARGET {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Consistency,
            title: "Build a steadier logging rhythm".to_string(),
            description: format!(
                "Your logging cadence scores {:.2} out of 1.0. Logging at roughly the same time every day raises it.",
                overall.consistency_score
            ),
            priority: Priority::Medium,
        });
    }

    if let Some(hour) = patterns.peak_hour {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Schedule,
            title: "Optimize your schedule".to_string(),
            description: format!(
                "Most of your completions happen around {:02}:00. Scheduling new habits in that window plays to your momentum.",
                hour
            ),
            priority: Priority::Low,
        });
    }

    recommendations
}
