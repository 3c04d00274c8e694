/// Overall statistics across a user's entire habit history
///
/// Counts, the aggregate completion rate, activity span, and the
/// variance-based consistency score over logging cadence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::analytics::rate_pct;
use crate::domain::{HabitLog, UserHabitSnapshot};

/// Aggregate statistics over every habit and log in the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    /// Total number of log records
    pub total_logs: u32,
    /// Logs with completed status
    pub completed_logs: u32,
    /// completed/total as a 0-100 percentage, 0 when there are no logs
    pub completion_rate: f64,
    /// Habits currently marked active
    pub active_habits: u32,
    /// All habits, active or paused
    pub total_habits: u32,
    /// Distinct calendar days on which anything was logged
    pub days_active: u32,
    /// Whole days between the earliest log and now, 0 when there are no logs
    pub days_since_first_log: i64,
    /// Regularity of logging cadence in [0, 1]; see `consistency_score`
    pub consistency_score: f64,
}

pub(crate) fn compute(snapshot: &UserHabitSnapshot, now: DateTime<Utc>) -> OverallStats {
    let total_logs = snapshot.logs.len();
    let completed_logs = snapshot.logs.iter().filter(|l| l.is_completed()).count();

    let active_habits = snapshot.habits.iter().filter(|h| h.is_active).count();
    let total_habits = snapshot.habits.len();

    let days_active: BTreeSet<_> = snapshot
        .logs
        .iter()
        .map(|l| l.created_at.naive_utc().date())
        .collect();

    let days_since_first_log = snapshot
        .logs
        .iter()
        .map(|l| l.created_at)
        .min()
        .map_or(0, |first| (now - first).num_days().max(0));

    OverallStats {
        total_logs: total_logs as u32,
        completed_logs: completed_logs as u32,
        completion_rate: rate_pct(completed_logs, total_logs),
        active_habits: active_habits as u32,
        total_habits: total_habits as u32,
        days_active: days_active.len() as u32,
        days_since_first_log,
        consistency_score: consistency_score(&snapshot.logs),
    }
}

/// Score logging cadence regularity into [0, 1]
///
/// Over completed logs ordered by creation time: take consecutive inter-log
/// gaps in hours, then `1 / (1 + stddev/mean)` of those gaps. Evenly spaced
/// logging scores near 1, bursty logging near 0. Requires at least two
/// completed logs and a non-zero mean gap; otherwise 0.
fn consistency_score(logs: &[HabitLog]) -> f64 {
    let mut completed: Vec<&HabitLog> = logs.iter().filter(|l| l.is_completed()).collect();
    if completed.len() < 2 {
        return 0.0;
    }
    completed.sort_by_key(|l| l.created_at);

    let gaps: Vec<f64> = completed
        .windows(2)
        .map(|pair| (pair[1].created_at - pair[0].created_at).num_seconds() as f64 / 3600.0)
        .collect();

    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    if mean <= 0.0 {
        return 0.0;
    }

    // Population variance over the gap series
    let variance = gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / gaps.len() as f64;

    (1.0 / (1.0 + variance.sqrt() / mean)).clamp(0.0, 1.0)
}
