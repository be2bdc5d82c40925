use std::io::Write;
use wellness_core::{
    ConfigError, ManualClock, MatchMode, MoodCategory, RuleTableError, StressType,
    WellnessConfig, WellnessSession,
};

const PARTIAL_CONFIG: &str = r#"{
    "mood_rules": {
        "match_mode": "word",
        "rules": [
            { "category": "sad", "keywords": ["unhappy", "blue"] },
            { "category": "happy", "keywords": ["happy"] }
        ],
        "fallback": "neutral"
    },
    "tips": ["Drink a glass of water."]
}"#;

fn write_config(raw: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(raw.as_bytes()).unwrap();
    file
}

#[test]
fn partial_config_overrides_only_named_sections() {
    let file = write_config(PARTIAL_CONFIG);
    let config = WellnessConfig::load(file.path()).unwrap();

    assert_eq!(config.mood_rules.match_mode, MatchMode::Word);
    assert_eq!(config.mood_rules.rules[0].category, MoodCategory::Sad);
    assert_eq!(config.stress_rules, WellnessConfig::default().stress_rules);
    assert_eq!(config.circles, WellnessConfig::default().circles);
    assert_eq!(config.tips, vec!["Drink a glass of water.".to_string()]);
}

#[test]
fn session_built_from_config_uses_its_tables() {
    let file = write_config(PARTIAL_CONFIG);
    let config = WellnessConfig::load(file.path()).unwrap();
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    let session = WellnessSession::from_config(&config, ManualClock::new(start)).unwrap();

    assert_eq!(
        session.classifier.classify_mood("happy but a little unhappy").category,
        MoodCategory::Sad
    );
    assert_eq!(
        session.classifier.classify_stress_type("rent is due").category,
        StressType::Money
    );
    assert_eq!(session.daily_tip(), "Drink a glass of water.");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WellnessConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_config("{ \"tips\": [ ");
    let err = WellnessConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn blank_keyword_is_rejected_at_load() {
    let file = write_config(
        r#"{ "stress_rules": {
            "rules": [{ "category": "work", "keywords": ["job", " "] }],
            "fallback": "general"
        } }"#,
    );
    let err = WellnessConfig::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Rules(RuleTableError::BlankKeyword { rule_index: 0 })
    ));
}

#[test]
fn default_config_round_trips_through_json() {
    let raw = serde_json::to_string(&WellnessConfig::default()).unwrap();
    let parsed = WellnessConfig::from_json_str(&raw).unwrap();
    assert_eq!(parsed, WellnessConfig::default());
}

#[test]
fn circles_section_may_override_only_its_rules() {
    let config = WellnessConfig::from_json_str(
        r#"{ "circles": { "rules": {
            "rules": [{ "category": "Calm Minds", "keywords": ["insomnia"] }],
            "fallback": "Calm Minds"
        } } }"#,
    )
    .unwrap();

    assert_eq!(config.circles.roster, WellnessConfig::default().circles.roster);
    assert_eq!(config.circles.rules.rules.len(), 1);

    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    let session = WellnessSession::from_config(&config, ManualClock::new(start)).unwrap();
    assert_eq!(session.circles.recommend("insomnia again"), "Calm Minds");
    assert_eq!(session.circles.recommend("exam stress"), "Calm Minds");
}

#[test]
fn circles_section_may_override_only_its_roster() {
    let config = WellnessConfig::from_json_str(
        r#"{ "circles": { "roster": [
            { "name": "Stress Support Circle", "topic": "Exams" },
            { "name": "Productivity Boosters", "topic": "Focus" },
            { "name": "Calm Minds", "topic": "Rest", "seed_count": 4 }
        ] } }"#,
    )
    .unwrap();

    assert_eq!(config.circles.rules, WellnessConfig::default().circles.rules);
    assert_eq!(config.circles.roster[2].seed_count, 4);
}
