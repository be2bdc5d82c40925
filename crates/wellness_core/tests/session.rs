use chrono::{NaiveDate, NaiveDateTime};
use wellness_core::{
    relief_plan, CoreError, JoinOutcome, ManualClock, MoodCategory, StressType, TaskProgress,
    WellnessSession,
};

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 20)
        .and_then(|d| d.and_hms_opt(18, 30, 3))
        .unwrap()
}

#[test]
fn session_stores_share_the_session_clock() {
    let clock = ManualClock::new(start());
    let mut session = WellnessSession::new(clock.clone());

    session.tasks.add_tasks("stretch");
    let entry = session.moods.log_mood(MoodCategory::Happy, None);

    assert_eq!(session.tasks.tasks()[0].created_time, start().time());
    assert_eq!(entry.timestamp, start().time());
}

#[test]
fn sessions_are_isolated() {
    let mut first = WellnessSession::new(ManualClock::new(start()));
    let second = WellnessSession::new(ManualClock::new(start()));

    assert_eq!(
        first.circles.join("Calm Minds", "Noor").unwrap(),
        JoinOutcome::Joined
    );
    first.tasks.add_tasks("read");

    assert!(second.circles.members("Calm Minds").unwrap().is_empty());
    assert_eq!(second.tasks.summary().progress(), TaskProgress::Empty);
}

#[test]
fn check_in_combines_classifiers_and_tips() {
    let session = WellnessSession::new(ManualClock::new(start()));

    let check_in = session
        .check_in("I'm sad and anxious about my exam")
        .unwrap();

    assert_eq!(check_in.mood, MoodCategory::Sad);
    assert_eq!(check_in.stress, StressType::Study);
    assert_eq!(check_in.relief_plan, relief_plan(MoodCategory::Sad));
    assert_eq!(check_in.suggestion, StressType::Study.suggestion());
    assert_eq!(check_in.circle, "Stress Support Circle");
}

#[test]
fn check_in_rejects_blank_text() {
    let session = WellnessSession::new(ManualClock::new(start()));
    assert!(matches!(
        session.check_in("  \n "),
        Err(CoreError::InvalidArgument(_))
    ));
}

#[test]
fn daily_tip_follows_the_clock_second() {
    let clock = ManualClock::new(start());
    let session = WellnessSession::new(clock.clone());
    // 3 seconds past the minute selects the fourth tip.
    assert_eq!(session.daily_tip(), session.tips.tips()[3]);
}
