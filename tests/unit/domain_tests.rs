/// Unit tests for domain entities and validation rules
use habit_analytics::*;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

#[cfg(test)]
mod domain_unit_tests {
    use super::*;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new(UserId::new(), "Drink water".to_string(), HabitKind::Water);

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.name, "Drink water");
        assert!(habit.is_active);
    }

    #[test]
    fn test_habit_name_validation() {
        assert!(Habit::new(UserId::new(), "".to_string(), HabitKind::Sleep).is_err());
        assert!(Habit::new(UserId::new(), "x".repeat(101), HabitKind::Sleep).is_err());
    }

    #[test]
    fn test_log_creation_and_payload_access() {
        let today = Utc::now().naive_utc().date();
        let log = HabitLog::new(
            HabitId::new(),
            UserId::new(),
            today,
            LogStatus::Completed,
            json!({"completion_time": 15.5}),
            Some("quick session".to_string()),
        );

        assert!(log.is_ok());
        let log = log.unwrap();
        assert!(log.is_completed());
        assert_eq!(log.completion_time(), Some(15.5));
    }

    #[test]
    fn test_log_date_validation() {
        let today = Utc::now().naive_utc().date();

        let future = HabitLog::new(
            HabitId::new(),
            UserId::new(),
            today + Duration::days(1),
            LogStatus::Completed,
            Value::Null,
            None,
        );
        assert!(future.is_err());

        let ancient = HabitLog::new(
            HabitId::new(),
            UserId::new(),
            today - Duration::days(400),
            LogStatus::Completed,
            Value::Null,
            None,
        );
        assert!(ancient.is_err());
    }

    #[test]
    fn test_log_notes_validation() {
        let today = Utc::now().naive_utc().date();
        let result = HabitLog::new(
            HabitId::new(),
            UserId::new(),
            today,
            LogStatus::Partial,
            Value::Null,
            Some("n".repeat(501)),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_snapshot_serialization_round_trip() {
        let user_id = UserId::new();
        let habit = Habit::new(user_id.clone(), "Meditate".to_string(), HabitKind::Meditation).unwrap();
        let log = HabitLog::new(
            habit.id.clone(),
            user_id.clone(),
            Utc::now().naive_utc().date(),
            LogStatus::Completed,
            json!({"minutes": 10}),
            None,
        )
        .unwrap();

        let snapshot = UserHabitSnapshot::new(
            UserProfile::new(user_id, "Robin".to_string(), 120, 2, 80),
            vec![habit],
            vec![log],
        );

        let encoded = serde_json::to_string(&snapshot).unwrap();
        let decoded: UserHabitSnapshot = serde_json::from_str(&encoded).unwrap();
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn test_log_filter_criteria() {
        let user_id = UserId::new();
        let habit_id = HabitId::new();
        let today = Utc::now().naive_utc().date();
        let log = HabitLog::new(
            habit_id.clone(),
            user_id,
            today,
            LogStatus::Completed,
            Value::Null,
            None,
        )
        .unwrap();

        assert!(LogFilter::all().matches(&log));
        assert!(LogFilter::all().for_habit(habit_id.clone()).matches(&log));
        assert!(!LogFilter::all().for_habit(HabitId::new()).matches(&log));
        assert!(LogFilter::all().with_status(LogStatus::Completed).matches(&log));
        assert!(!LogFilter::all().with_status(LogStatus::Missed).matches(&log));
        assert!(LogFilter::all()
            .between(today - Duration::days(1), today)
            .matches(&log));
        assert!(!LogFilter::all()
            .between(today - Duration::days(5), today - Duration::days(1))
            .matches(&log));
    }
}
