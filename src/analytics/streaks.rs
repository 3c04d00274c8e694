/// Streak analysis over completed-log calendar dates
///
/// A streak is a run of consecutive calendar dates that each carry at least
/// one completed log. The current streak walks backward from today; the
/// longest streak scans the full dated history.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::domain::UserHabitSnapshot;

/// Streak figures across all of a user's habits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakAnalysis {
    /// Consecutive active days ending today; 0 when today is inactive
    pub current_streak: u32,
    /// Longest run of calendar-adjacent active days in the history
    pub longest_streak: u32,
    /// Reserved; no product definition yet, always 0.0
    pub average_streak: f64,
    /// Reserved; no product definition yet, always 0.0
    pub streak_consistency: f64,
}

pub(crate) fn compute(snapshot: &UserHabitSnapshot, now: DateTime<Utc>) -> StreakAnalysis {
    // Distinct calendar dates (by creation date) with at least one completion
    let active_dates: BTreeSet<NaiveDate> = snapshot
        .completed_logs()
        .iter()
        .map(|l| l.created_at.naive_utc().date())
        .collect();

    StreakAnalysis {
        current_streak: current_streak(&active_dates, now.naive_utc().date()),
        longest_streak: longest_streak(&active_dates),
        average_streak: 0.0,
        streak_consistency: 0.0,
    }
}

/// Count consecutive active dates walking backward from today
///
/// Stops at the first missing date; today itself missing means 0.
fn current_streak(active_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut date = today;

    while active_dates.contains(&date) {
        streak += 1;
        date = date - Duration::days(1);
    }

    streak
}

/// Longest run of day-adjacent dates in the ascending active-date list
///
/// Adjacency is checked date-by-date: a run only extends when the next
/// active date is exactly one day after the previous one.
fn longest_streak(active_dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for date in active_dates {
        run = match prev {
            Some(p) if *date == p + Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*date);
    }

    longest
}
