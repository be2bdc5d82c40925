//! Classification categories and results.

use serde::{Deserialize, Serialize};

/// Dominant source of stress described in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressType {
    TimeManagement,
    Money,
    Study,
    Emotional,
    Work,
    Fatigue,
    Anxiety,
    General,
}

impl StressType {
    /// Short coping suggestion shown beside the classification.
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::TimeManagement => {
                "Break the day into short blocks and pick the three tasks that matter most."
            }
            Self::Money => "Write down this month's fixed costs; a plan on paper is lighter than one in your head.",
            Self::Study => "Study in 25-minute sessions with 5-minute breaks, and review before you sleep.",
            Self::Emotional => "Reach out to someone you trust, or join a peer circle to talk it through.",
            Self::Work => "Set a firm end to your workday and step away from screens after it.",
            Self::Fatigue => "Rest is productive: hydrate, stretch, and aim for an early night.",
            Self::Anxiety => "Try box breathing: in for 4, hold for 4, out for 4, hold for 4.",
            Self::General => "Step outside for a short walk and take five slow breaths.",
        }
    }
}

/// Rule that produced a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Position of the rule in its table.
    pub rule_index: usize,
    /// First keyword of that rule found in the text.
    pub keyword: String,
}

/// Category chosen for one input, plus the rule that chose it.
///
/// `matched` is `None` when no rule fired and the fallback was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult<C> {
    pub category: C,
    pub matched: Option<RuleMatch>,
}

impl<C> ClassificationResult<C> {
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }
}
