//! Canonical built-in rule tables, circle roster and tips.
//!
//! These are the defaults a `WellnessConfig` falls back to for any section a
//! config document leaves out.

use crate::model::circle::CircleDefinition;
use crate::model::classification::StressType;
use crate::model::mood::MoodCategory;
use crate::rules::table::{KeywordRule, RuleTable};

pub const STRESS_SUPPORT_CIRCLE: &str = "Stress Support Circle";
pub const PRODUCTIVITY_BOOSTERS: &str = "Productivity Boosters";
pub const CALM_MINDS: &str = "Calm Minds";

const HAPPY_WORDS: &[&str] = &[
    "happy", "joy", "glad", "great", "good", "excited", "grateful", "cheerful", "awesome",
    "amazing", "wonderful",
];
const SAD_WORDS: &[&str] = &[
    "sad", "unhappy", "down", "depressed", "lonely", "cry", "upset", "miserable", "hopeless",
    "heartbroken", "hurt",
];

const DAILY_TIPS: &[&str] = &[
    "🌞 Step outside and take 5 deep breaths.",
    "🧘 Try 5 minutes of meditation — quiet minds create calm hearts.",
    "🎧 Listen to your favorite calming song.",
    "🪴 Water your plants or tidy your space for clarity.",
    "💖 Send a thank-you message to someone today.",
];

/// Happy is checked before Sad, so text with both resolves to Happy.
pub fn mood_rules() -> RuleTable<MoodCategory> {
    RuleTable::new(
        vec![
            KeywordRule::new(MoodCategory::Happy, HAPPY_WORDS),
            KeywordRule::new(MoodCategory::Sad, SAD_WORDS),
        ],
        MoodCategory::Neutral,
    )
}

pub fn stress_rules() -> RuleTable<StressType> {
    RuleTable::new(
        vec![
            KeywordRule::new(
                StressType::TimeManagement,
                &[
                    "deadline",
                    "no time",
                    "not enough time",
                    "running out of time",
                    "schedule",
                    "procrastinat",
                    "time management",
                ],
            ),
            KeywordRule::new(
                StressType::Money,
                &[
                    "money", "rent", "debt", "loan", "bills", "fees", "salary", "broke", "afford",
                    "expenses",
                ],
            ),
            KeywordRule::new(
                StressType::Study,
                &[
                    "exam",
                    "study",
                    "studies",
                    "assignment",
                    "homework",
                    "grades",
                    "syllabus",
                    "semester",
                    "college",
                    "school",
                ],
            ),
            KeywordRule::new(
                StressType::Emotional,
                &[
                    "lonely",
                    "breakup",
                    "break up",
                    "heartbreak",
                    "sad",
                    "cry",
                    "family",
                    "relationship",
                    "hurt",
                    "upset",
                ],
            ),
            KeywordRule::new(
                StressType::Work,
                &[
                    "work", "job", "boss", "office", "colleague", "manager", "meeting", "client",
                ],
            ),
            KeywordRule::new(
                StressType::Fatigue,
                &[
                    "tired",
                    "exhausted",
                    "sleep",
                    "fatigue",
                    "burnout",
                    "burnt out",
                    "drained",
                    "no energy",
                ],
            ),
            KeywordRule::new(
                StressType::Anxiety,
                &[
                    "anxious",
                    "anxiety",
                    "panic",
                    "worried",
                    "worry",
                    "nervous",
                    "overthink",
                    "fear",
                    "scared",
                ],
            ),
        ],
        StressType::General,
    )
}

pub fn circle_roster() -> Vec<CircleDefinition> {
    vec![
        CircleDefinition::new(STRESS_SUPPORT_CIRCLE, "Managing academic stress")
            .with_seed_count(12),
        CircleDefinition::new(PRODUCTIVITY_BOOSTERS, "Focus and motivation").with_seed_count(9),
        CircleDefinition::new(CALM_MINDS, "Mindfulness and relaxation").with_seed_count(15),
    ]
}

pub fn circle_rules() -> RuleTable<String> {
    RuleTable::new(
        vec![
            KeywordRule::new(
                STRESS_SUPPORT_CIRCLE.to_string(),
                &[
                    "exam",
                    "anxious",
                    "stress",
                    "pressure",
                    "study",
                    "assignment",
                    "deadline",
                    "worried",
                ],
            ),
            KeywordRule::new(
                PRODUCTIVITY_BOOSTERS.to_string(),
                &[
                    "focus",
                    "procrastinat",
                    "motivat",
                    "distract",
                    "productiv",
                    "lazy",
                    "goal",
                ],
            ),
            KeywordRule::new(
                CALM_MINDS.to_string(),
                &[
                    "calm",
                    "relax",
                    "sleep",
                    "mindful",
                    "meditat",
                    "peace",
                    "overthink",
                    "restless",
                ],
            ),
        ],
        CALM_MINDS.to_string(),
    )
}

pub fn daily_tips() -> Vec<String> {
    DAILY_TIPS.iter().map(|tip| tip.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{circle_roster, circle_rules, mood_rules, stress_rules};

    #[test]
    fn built_in_tables_compile() {
        mood_rules().compile().expect("mood rules");
        stress_rules().compile().expect("stress rules");
        circle_rules().compile().expect("circle rules");
    }

    #[test]
    fn circle_rules_only_target_roster_names() {
        let roster: Vec<String> = circle_roster().into_iter().map(|c| c.name).collect();
        let rules = circle_rules();
        assert!(roster.contains(&rules.fallback));
        for rule in &rules.rules {
            assert!(roster.contains(&rule.category), "{}", rule.category);
        }
    }
}
