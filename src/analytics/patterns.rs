/// Temporal distribution of completed logs
///
/// Where in the day, week, and month a user's completions land, plus the
/// peak hour and day used by the scheduling recommendation.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::domain::{weekday_name, UserHabitSnapshot, WEEKDAYS};

/// Distribution of completed logs by creation time
///
/// All grouping keys derive from the log creation timestamp: completions are
/// a record of when the user actually logged, which is what schedule
/// optimization cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePatterns {
    /// Hour of day (0-23) -> completed log count
    pub hourly_distribution: BTreeMap<u32, u64>,
    /// Weekday name -> completed log count
    pub weekly_distribution: BTreeMap<String, u64>,
    /// Year-month ("YYYY-MM") -> completed log count
    pub monthly_distribution: BTreeMap<String, u64>,
    /// Hour with the most completions; None without completed logs
    pub peak_hour: Option<u32>,
    /// Weekday with the most completions; None without completed logs
    pub peak_day: Option<String>,
}

pub(crate) fn compute(snapshot: &UserHabitSnapshot) -> TimePatterns {
    let mut hour_counts = [0u64; 24];
    let mut day_counts = [0u64; 7];
    let mut monthly_distribution: BTreeMap<String, u64> = BTreeMap::new();

    for log in snapshot.completed_logs() {
        let created = log.created_at.naive_utc();
        hour_counts[created.hour() as usize] += 1;
        day_counts[created.weekday().num_days_from_monday() as usize] += 1;
        *monthly_distribution
            .entry(created.format("%Y-%m").to_string())
            .or_insert(0) += 1;
    }

    let hourly_distribution: BTreeMap<u32, u64> = hour_counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(hour, count)| (hour as u32, *count))
        .collect();

    let weekly_distribution: BTreeMap<String, u64> = WEEKDAYS
        .iter()
        .enumerate()
        .filter(|(idx, _)| day_counts[*idx] > 0)
        .map(|(idx, weekday)| (weekday_name(*weekday).to_string(), day_counts[idx]))
        .collect();

    TimePatterns {
        hourly_distribution,
        weekly_distribution,
        monthly_distribution,
        peak_hour: peak_hour(&hour_counts),
        peak_day: peak_day(&day_counts),
    }
}

/// Hour with the highest count; earliest hour wins ties, None when all zero
fn peak_hour(hour_counts: &[u64; 24]) -> Option<u32> {
    let mut peak: Option<(u32, u64)> = None;
    for (hour, count) in hour_counts.iter().enumerate() {
        if *count > 0 && peak.map_or(true, |(_, best)| *count > best) {
            peak = Some((hour as u32, *count));
        }
    }
    peak.map(|(hour, _)| hour)
}

/// Weekday with the highest count; Monday-first order breaks ties
fn peak_day(day_counts: &[u64; 7]) -> Option<String> {
    let mut peak: Option<(usize, u64)> = None;
    for (idx, count) in day_counts.iter().enumerate() {
        if *count > 0 && peak.map_or(true, |(_, best)| *count > best) {
            peak = Some((idx, *count));
        }
    }
    peak.map(|(idx, _)| weekday_name(WEEKDAYS[idx]).to_string())
}
