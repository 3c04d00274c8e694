/// Per-habit performance analysis
///
/// Counts and completion rate per habit, weekday breakdowns with best/worst
/// day selection, average completion time, and the short-window trend
/// classification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use chrono::Datelike;
use crate::analytics::rate_pct;
use crate::domain::{weekday_name, Habit, HabitId, HabitKind, HabitLog, UserHabitSnapshot, WEEKDAYS};

/// Direction of a habit's recent completion rate relative to its prior window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Fewer than seven logs exist for the habit
    InsufficientData,
    /// Recent completion rate exceeds the prior rate by more than 10 points
    Improving,
    /// Recent completion rate trails the prior rate by more than 10 points
    Declining,
    /// Rates within 10 points of each other
    Stable,
}

/// Performance summary for a single habit, computed over its own logs only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitPerformance {
    /// Which habit this entry describes
    pub habit_id: HabitId,
    /// Habit display name, carried through for callers
    pub name: String,
    /// What kind of activity the habit tracks
    pub kind: HabitKind,
    /// Whether the habit is currently active
    pub is_active: bool,
    /// Total log records for this habit
    pub total_logs: u32,
    /// Logs with completed status
    pub completed_logs: u32,
    /// completed/total as a 0-100 percentage, 0 when there are no logs
    pub completion_rate: f64,
    /// Mean completion_time over completed logs carrying one, 0 when none do
    pub avg_completion_time: f64,
    /// Weekday name -> completion percentage among that weekday's logs
    pub day_performance: BTreeMap<String, f64>,
    /// Weekday with the highest completion percentage (Monday-first tie-break)
    pub best_day: Option<String>,
    /// Weekday with the lowest completion percentage (Monday-first tie-break)
    pub worst_day: Option<String>,
    /// Recent-vs-prior completion rate comparison
    pub trend: Trend,
}

pub(crate) fn compute(snapshot: &UserHabitSnapshot) -> Vec<HabitPerformance> {
    snapshot
        .habits
        .iter()
        .map(|habit| per_habit(habit, &snapshot.logs_for(&habit.id)))
        .collect()
}

fn per_habit(habit: &Habit, logs: &[&HabitLog]) -> HabitPerformance {
    let total = logs.len();
    let completed = logs.iter().filter(|l| l.is_completed()).count();

    let times: Vec<f64> = logs
        .iter()
        .filter(|l| l.is_completed())
        .filter_map(|l| l.completion_time())
        .collect();
    let avg_completion_time = if times.is_empty() {
        0.0
    } else {
        times.iter().sum::<f64>() / times.len() as f64
    };

    let (day_performance, best_day, worst_day) = weekday_breakdown(logs);

    HabitPerformance {
        habit_id: habit.id.clone(),
        name: habit.name.clone(),
        kind: habit.kind,
        is_active: habit.is_active,
        total_logs: total as u32,
        completed_logs: completed as u32,
        completion_rate: rate_pct(completed, total),
        avg_completion_time,
        day_performance,
        best_day,
        worst_day,
        trend: classify_trend(logs),
    }
}

/// Completion percentage per weekday of the log date, with best/worst picks
///
/// Only weekdays that have at least one log appear in the map. Best and worst
/// scan in Monday-first order, so ties resolve to the earlier weekday.
fn weekday_breakdown(
    logs: &[&HabitLog],
) -> (BTreeMap<String, f64>, Option<String>, Option<String>) {
    let mut totals = [0u32; 7];
    let mut completed = [0u32; 7];

    for log in logs {
        let idx = log.log_date.weekday().num_days_from_monday() as usize;
        totals[idx] += 1;
        if log.is_completed() {
            completed[idx] += 1;
        }
    }

    let mut day_performance = BTreeMap::new();
    let mut best: Option<(f64, &'static str)> = None;
    let mut worst: Option<(f64, &'static str)> = None;

    for (idx, weekday) in WEEKDAYS.iter().enumerate() {
        if totals[idx] == 0 {
            continue;
        }
        let pct = rate_pct(completed[idx] as usize, totals[idx] as usize);
        let name = weekday_name(*weekday);
        day_performance.insert(name.to_string(), pct);

        if best.map_or(true, |(b, _)| pct > b) {
            best = Some((pct, name));
        }
        if worst.map_or(true, |(w, _)| pct < w) {
            worst = Some((pct, name));
        }
    }

    (
        day_performance,
        best.map(|(_, name)| name.to_string()),
        worst.map(|(_, name)| name.to_string()),
    )
}

/// Compare the most recent seven logs against the seven before them
///
/// Logs are sorted by (log date, creation time) descending before windowing,
/// so the comparison is stable regardless of snapshot order. With fewer than
/// fourteen logs the older window is short (possibly empty) and its rate
/// falls back to 0.
fn classify_trend(logs: &[&HabitLog]) -> Trend {
    if logs.len() < 7 {
        return Trend::InsufficientData;
    }

    let mut ordered: Vec<&HabitLog> = logs.to_vec();
    ordered.sort_by(|a, b| {
        b.log_date
            .cmp(&a.log_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    let recent = completion_fraction(&ordered[..7]);
    let older = completion_fraction(&ordered[7..ordered.len().min(14)]);

    if recent - older > 0.10 {
        Trend::Improving
    } else if older - recent > 0.10 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Completed fraction in [0, 1], 0 for an empty window
fn completion_fraction(logs: &[&HabitLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().filter(|l| l.is_completed()).count() as f64 / logs.len() as f64
}
