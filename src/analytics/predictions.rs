/// Short-term predictive heuristics over the recent log window
///
/// Everything here is deliberately approximate: a jittered next-week rate,
/// milestone arithmetic, and a step-function confidence level. The jitter is
/// the only non-deterministic output in the whole analysis and is driven by
/// the engine's seedable RNG.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::domain::{HabitLog, UserHabitSnapshot};

/// Sentinel for "no completions in the last 30 days, milestone unreachable"
const MILESTONE_FAR_OFF: u32 = 999;

/// How many recent logs feed the prediction window
const WINDOW_SIZE: usize = 30;

/// Forward-looking heuristics computed over the 30 most recent logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    /// Completed fraction in [0, 1] within the recent window
    pub completion_rate: f64,
    /// Jittered projection of next week's completion percentage, in [0, 100]
    pub predicted_completion_rate_next_week: f64,
    /// Smallest multiple of 10 at or above the all-time completed count
    pub next_milestone: u32,
    /// Days until the milestone at the recent completion pace; 999 when stalled
    pub estimated_days_to_milestone: u32,
    /// 0.3 / 0.6 / 0.9 step function of window size
    pub confidence_level: f64,
}

pub(crate) fn compute<R: Rng>(
    snapshot: &UserHabitSnapshot,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Predictions {
    // Most recently created logs of any status, so the window rate is
    // informative rather than completed-by-construction
    let mut recent: Vec<&HabitLog> = snapshot.logs.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(WINDOW_SIZE);

    let window_total = recent.len();
    let window_completed = recent.iter().filter(|l| l.is_completed()).count();
    let completion_rate = if window_total == 0 {
        0.0
    } else {
        window_completed as f64 / window_total as f64
    };

    let jitter = rng.gen_range(-5i32..=5);
    let predicted = (completion_rate * 100.0 + f64::from(jitter)).clamp(0.0, 100.0);

    let total_completed = snapshot.logs.iter().filter(|l| l.is_completed()).count() as u32;
    let next_milestone = total_completed.div_ceil(10) * 10;

    Predictions {
        completion_rate,
        predicted_completion_rate_next_week: predicted,
        next_milestone,
        estimated_days_to_milestone: days_to_milestone(snapshot, now, total_completed, next_milestone),
        confidence_level: confidence_level(window_total),
    }
}

/// Days to the next milestone at the average daily completion pace of the
/// last 30 days, rounded up
fn days_to_milestone(
    snapshot: &UserHabitSnapshot,
    now: DateTime<Utc>,
    total_completed: u32,
    next_milestone: u32,
) -> u32 {
    if total_completed >= next_milestone {
        return 0;
    }

    let cutoff = now - Duration::days(30);
    let recent_completions = snapshot
        .logs
        .iter()
        .filter(|l| l.is_completed() && l.created_at >= cutoff)
        .count();
    let avg_daily = recent_completions as f64 / 30.0;

    if avg_daily <= 0.0 {
        return MILESTONE_FAR_OFF;
    }

    (f64::from(next_milestone - total_completed) / avg_daily).ceil() as u32
}

/// Confidence steps with sample size: thin data earns a low score
fn confidence_level(data_points: usize) -> f64 {
    if data_points < 7 {
        0.3
    } else if data_points < 30 {
        0.6
    } else {
        0.9
    }
}
