/// Unit tests for the analytics engine's documented properties
use habit_analytics::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

/// Fixed evaluation instant so streak and window math is reproducible
fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

/// Snapshot with one habit and no logs
fn empty_snapshot() -> UserHabitSnapshot {
    let user_id = UserId::new();
    let habit = Habit::new(user_id.clone(), "Hydrate".to_string(), HabitKind::Water).unwrap();
    UserHabitSnapshot::new(
        UserProfile::new(user_id, "Jo".to_string(), 0, 1, 100),
        vec![habit],
        vec![],
    )
}

/// Log created at a given instant, dated by that instant's calendar day
fn log_created(habit_id: &HabitId, user_id: &UserId, created: DateTime<Utc>, status: LogStatus) -> HabitLog {
    HabitLog::from_parts(
        LogId::new(),
        habit_id.clone(),
        user_id.clone(),
        created.naive_utc().date(),
        status,
        Value::Null,
        None,
        created,
    )
}

/// Snapshot with one habit and one log per status in `statuses`, spaced a day
/// apart ending the day before `now`
fn snapshot_with_statuses(statuses: &[LogStatus], now: DateTime<Utc>) -> UserHabitSnapshot {
    let user_id = UserId::new();
    let habit = Habit::new(user_id.clone(), "Exercise".to_string(), HabitKind::Exercise).unwrap();
    let logs = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let created = now - Duration::days((statuses.len() - i) as i64);
            log_created(&habit.id, &user_id, created, *status)
        })
        .collect();

    UserHabitSnapshot::new(
        UserProfile::new(user_id, "Alex".to_string(), 0, 1, 100),
        vec![habit],
        logs,
    )
}

#[cfg(test)]
mod analytics_unit_tests {
    use super::*;

    #[test]
    fn test_zero_guard_empty_history() {
        let snapshot = empty_snapshot();
        let mut engine = AnalyticsEngine::with_seed(1);
        let analysis = engine.analyze_at(&snapshot, fixed_now());

        assert_eq!(analysis.overall.total_logs, 0);
        assert_eq!(analysis.overall.completion_rate, 0.0);
        assert_eq!(analysis.overall.consistency_score, 0.0);
        assert_eq!(analysis.overall.days_since_first_log, 0);
        assert!(analysis.time_patterns.hourly_distribution.is_empty());
        assert!(analysis.time_patterns.weekly_distribution.is_empty());
        assert!(analysis.time_patterns.monthly_distribution.is_empty());
        assert_eq!(analysis.time_patterns.peak_hour, None);
        assert_eq!(analysis.streaks.current_streak, 0);
        assert_eq!(analysis.streaks.longest_streak, 0);
        assert_eq!(analysis.predictions.completion_rate, 0.0);

        // The habit still gets a (zeroed) performance entry
        assert_eq!(analysis.habits.len(), 1);
        assert_eq!(analysis.habits[0].completion_rate, 0.0);
        assert_eq!(analysis.habits[0].trend, Trend::InsufficientData);
        assert_eq!(analysis.habits[0].best_day, None);
    }

    #[test]
    fn test_completion_rate_seven_of_ten() {
        let mut statuses = vec![LogStatus::Completed; 7];
        statuses.extend([LogStatus::Missed, LogStatus::Partial, LogStatus::Missed]);
        let snapshot = snapshot_with_statuses(&statuses, fixed_now());

        let mut engine = AnalyticsEngine::with_seed(1);
        let analysis = engine.analyze_at(&snapshot, fixed_now());

        assert_eq!(analysis.overall.total_logs, 10);
        assert_eq!(analysis.overall.completed_logs, 7);
        assert_eq!(analysis.overall.completion_rate, 70.0);
    }

    #[test]
    fn test_consistency_score_bounds() {
        let now = fixed_now();
        let user_id = UserId::new();
        let habit = Habit::new(user_id.clone(), "Read".to_string(), HabitKind::Meditation).unwrap();

        // Uneven but plausible cadence: gaps of 2h, 50h, 7h, 90h
        let offsets = [0i64, 2, 52, 59, 149];
        let logs: Vec<HabitLog> = offsets
            .iter()
            .map(|h| log_created(&habit.id, &user_id, now - Duration::hours(200 - h), LogStatus::Completed))
            .collect();
        let snapshot = UserHabitSnapshot::new(
            UserProfile::new(user_id, "Iris".to_string(), 0, 1, 100),
            vec![habit],
            logs,
        );

        let mut engine = AnalyticsEngine::with_seed(1);
        let analysis = engine.analyze_at(&snapshot, now);

        assert!(analysis.overall.consistency_score >= 0.0);
        assert!(analysis.overall.consistency_score <= 1.0);
        // Irregular spacing should not look perfectly consistent
        assert!(analysis.overall.consistency_score < 1.0);
    }

    #[test]
    fn test_current_streak_three_consecutive_days() {
        let now = fixed_now();
        let user_id = UserId::new();
        let habit = Habit::new(user_id.clone(), "Walk".to_string(), HabitKind::Exercise).unwrap();

        let logs = vec![
            log_created(&habit.id, &user_id, now - Duration::hours(1), LogStatus::Completed),
            log_created(&habit.id, &user_id, now - Duration::days(1), LogStatus::Completed),
            log_created(&habit.id, &user_id, now - Duration::days(2), LogStatus::Completed),
        ];
        let snapshot = UserHabitSnapshot::new(
            UserProfile::new(user_id, "Max".to_string(), 0, 1, 100),
            vec![habit],
            logs,
        );

        let mut engine = AnalyticsEngine::with_seed(1);
        let analysis = engine.analyze_at(&snapshot, now);

        assert_eq!(analysis.streaks.current_streak, 3);
        assert_eq!(analysis.streaks.longest_streak, 3);
    }

    #[test]
    fn test_gap_breaks_current_streak() {
        let now = fixed_now();
        let user_id = UserId::new();
        let habit = Habit::new(user_id.clone(), "Walk".to_string(), HabitKind::Exercise).unwrap();

        // Today and yesterday active, a gap two days ago, active before that
        let logs = vec![
            log_created(&habit.id, &user_id, now - Duration::hours(1), LogStatus::Completed),
            log_created(&habit.id, &user_id, now - Duration::days(1), LogStatus::Completed),
            log_created(&habit.id, &user_id, now - Duration::days(3), LogStatus::Completed),
            log_created(&habit.id, &user_id, now - Duration::days(4), LogStatus::Completed),
        ];
        let snapshot = UserHabitSnapshot::new(
            UserProfile::new(user_id, "Max".to_string(), 0, 1, 100),
            vec![habit],
            logs,
        );

        let mut engine = AnalyticsEngine::with_seed(1);
        let analysis = engine.analyze_at(&snapshot, now);

        assert_eq!(analysis.streaks.current_streak, 2);
        // Both runs are two days long
        assert_eq!(analysis.streaks.longest_streak, 2);
    }

    #[test]
    fn test_trend_classification_through_engine() {
        let now = fixed_now();

        // Oldest-first construction: older week 3/7, recent week 7/7
        let mut improving = vec![
            LogStatus::Completed,
            LogStatus::Missed,
            LogStatus::Completed,
            LogStatus::Missed,
            LogStatus::Completed,
            LogStatus::Missed,
            LogStatus::Missed,
        ];
        improving.extend([LogStatus::Completed; 7]);
        let mut engine = AnalyticsEngine::with_seed(1);

        let analysis = engine.analyze_at(&snapshot_with_statuses(&improving, now), now);
        assert_eq!(analysis.habits[0].trend, Trend::Improving);

        let declining: Vec<LogStatus> = improving.iter().rev().copied().collect();
        let analysis = engine.analyze_at(&snapshot_with_statuses(&declining, now), now);
        assert_eq!(analysis.habits[0].trend, Trend::Declining);

        let week = [
            LogStatus::Completed,
            LogStatus::Completed,
            LogStatus::Missed,
            LogStatus::Completed,
            LogStatus::Completed,
            LogStatus::Missed,
            LogStatus::Completed,
        ];
        let mut stable = week.to_vec();
        stable.extend(week);
        let analysis = engine.analyze_at(&snapshot_with_statuses(&stable, now), now);
        assert_eq!(analysis.habits[0].trend, Trend::Stable);
    }

    #[test]
    fn test_milestone_arithmetic() {
        let now = fixed_now();
        let mut engine = AnalyticsEngine::with_seed(1);

        let at_47 = engine.analyze_at(&snapshot_with_statuses(&[LogStatus::Completed; 47], now), now);
        assert_eq!(at_47.predictions.next_milestone, 50);

        let at_50 = engine.analyze_at(&snapshot_with_statuses(&[LogStatus::Completed; 50], now), now);
        assert_eq!(at_50.predictions.next_milestone, 50);
        assert_eq!(at_50.predictions.estimated_days_to_milestone, 0);
    }

    #[test]
    fn test_confidence_stepping() {
        let now = fixed_now();
        let mut engine = AnalyticsEngine::with_seed(1);

        let thin = engine.analyze_at(&snapshot_with_statuses(&[LogStatus::Completed; 5], now), now);
        assert_eq!(thin.predictions.confidence_level, 0.3);

        let medium = engine.analyze_at(&snapshot_with_statuses(&[LogStatus::Completed; 20], now), now);
        assert_eq!(medium.predictions.confidence_level, 0.6);

        let rich = engine.analyze_at(&snapshot_with_statuses(&[LogStatus::Completed; 40], now), now);
        assert_eq!(rich.predictions.confidence_level, 0.9);
    }

    #[test]
    fn test_seeded_idempotence() {
        let now = fixed_now();
        let mut statuses = vec![LogStatus::Completed; 12];
        statuses.extend([LogStatus::Missed; 4]);
        statuses.extend([LogStatus::Partial; 2]);
        let snapshot = snapshot_with_statuses(&statuses, now);

        let mut first_engine = AnalyticsEngine::with_seed(42);
        let mut second_engine = AnalyticsEngine::with_seed(42);

        let first = first_engine.analyze_at(&snapshot, now);
        let second = second_engine.analyze_at(&snapshot, now);

        // Identical seed and snapshot: every field matches, jitter included
        assert_eq!(first, second);
    }

    #[test]
    fn test_recommendations_for_struggling_user() {
        let now = fixed_now();
        let mut statuses = vec![LogStatus::Completed; 3];
        statuses.extend([LogStatus::Missed; 7]);
        let snapshot = snapshot_with_statuses(&statuses, now);

        let mut engine = AnalyticsEngine::with_seed(1);
        let analysis = engine.analyze_at(&snapshot, now);

        // 30% completion fires the high-priority rule first
        assert!(!analysis.recommendations.is_empty());
        assert_eq!(analysis.recommendations[0].kind, RecommendationKind::CompletionRate);
        assert_eq!(analysis.recommendations[0].priority, Priority::High);
    }

    #[test]
    fn test_days_active_counts_distinct_days() {
        let now = fixed_now();
        let user_id = UserId::new();
        let habit = Habit::new(user_id.clone(), "Water".to_string(), HabitKind::Water).unwrap();

        // Two logs on the same day, one the day before
        let logs = vec![
            log_created(&habit.id, &user_id, now - Duration::hours(2), LogStatus::Completed),
            log_created(&habit.id, &user_id, now - Duration::hours(5), LogStatus::Missed),
            log_created(&habit.id, &user_id, now - Duration::days(1), LogStatus::Completed),
        ];
        let snapshot = UserHabitSnapshot::new(
            UserProfile::new(user_id, "Lee".to_string(), 0, 1, 100),
            vec![habit],
            logs,
        );

        let mut engine = AnalyticsEngine::with_seed(1);
        let analysis = engine.analyze_at(&snapshot, now);

        assert_eq!(analysis.overall.days_active, 2);
        assert_eq!(analysis.overall.days_since_first_log, 1);
    }
}
