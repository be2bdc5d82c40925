use chrono::{Duration, NaiveDate, NaiveTime};
use wellness_core::{CoreError, ManualClock, MoodCategory, MoodLog};

fn clock() -> ManualClock {
    ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 9, 3)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap(),
    )
}

#[test]
fn series_follows_log_order_not_level_order() {
    let clock = clock();
    let mut log = MoodLog::new(clock.clone());

    log.log_mood(MoodCategory::Sad, None);
    clock.advance(Duration::minutes(1));
    log.log_mood(MoodCategory::Happy, None);
    clock.advance(Duration::minutes(1));
    log.log_mood(MoodCategory::Neutral, None);

    let points: Vec<(NaiveTime, u8)> = log
        .series()
        .into_iter()
        .map(|point| (point.timestamp, point.level))
        .collect();
    let t = |m| NaiveTime::from_hms_opt(8, m, 0).unwrap();
    assert_eq!(points, vec![(t(0), 1), (t(1), 3), (t(2), 2)]);
}

#[test]
fn series_is_recomputed_on_each_call() {
    let mut log = MoodLog::new(clock());
    assert!(log.series().is_empty());

    log.log_mood(MoodCategory::Happy, None);
    assert_eq!(log.series(), log.series());
    assert_eq!(log.series().len(), 1);
}

#[test]
fn summary_tallies_each_category() {
    let mut log = MoodLog::new(clock());
    log.log_mood(MoodCategory::Happy, None);
    log.log_mood(MoodCategory::Happy, Some("sunny walk"));
    log.log_mood(MoodCategory::Sad, None);

    let summary = log.summary();
    assert_eq!(summary[&MoodCategory::Happy], 2);
    assert_eq!(summary[&MoodCategory::Neutral], 0);
    assert_eq!(summary[&MoodCategory::Sad], 1);
}

#[test]
fn log_mood_label_accepts_picker_labels() {
    let mut log = MoodLog::new(clock());
    let entry = log.log_mood_label("😐 Neutral", Some("meh")).unwrap();
    assert_eq!(entry.category, MoodCategory::Neutral);
    assert_eq!(log.latest(), Some(&entry));

    let err = log.log_mood_label("", None).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
    assert_eq!(log.len(), 1);
}

#[test]
fn clear_empties_the_log() {
    let mut log = MoodLog::new(clock());
    log.log_mood(MoodCategory::Sad, None);
    log.clear();
    assert!(log.is_empty());
    assert!(log.series().is_empty());
}

#[test]
fn entry_serializes_with_snake_case_category() {
    let mut log = MoodLog::new(clock());
    let entry = log.log_mood(MoodCategory::Happy, Some("good sleep"));
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["category"], "happy");
    assert_eq!(json["timestamp"], "08:00:00");
    assert_eq!(json["note"], "good sleep");
}
