//! Daily wellness tips and mood-based relief plans.

use crate::error::{CoreError, CoreResult};
use crate::model::mood::MoodCategory;
use crate::rules::defaults;
use chrono::{NaiveDateTime, Timelike};

/// Rotating set of short wellness tips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipBook {
    tips: Vec<String>,
}

impl TipBook {
    /// Builds a tip book, dropping blank entries.
    ///
    /// # Errors
    /// - `InvalidArgument` when no non-blank tip remains.
    pub fn new(tips: Vec<String>) -> CoreResult<Self> {
        let tips: Vec<String> = tips
            .into_iter()
            .map(|tip| tip.trim().to_string())
            .filter(|tip| !tip.is_empty())
            .collect();
        if tips.is_empty() {
            return Err(CoreError::invalid("tip book needs at least one tip"));
        }
        Ok(Self { tips })
    }

    /// Tip shown at `now`; rotates with the seconds field.
    pub fn tip_at(&self, now: NaiveDateTime) -> &str {
        let index = now.second() as usize % self.tips.len();
        self.tips[index].as_str()
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }
}

impl Default for TipBook {
    fn default() -> Self {
        Self {
            tips: defaults::daily_tips(),
        }
    }
}

/// Relief plan for the mood a user reports.
pub fn relief_plan(mood: MoodCategory) -> &'static str {
    match mood {
        MoodCategory::Happy => {
            "🌞 Keep journaling and stay active — share your good vibes with someone today!"
        }
        MoodCategory::Neutral => "🌿 Try light meditation, hydrate well, and spend time offline.",
        MoodCategory::Sad => {
            "💖 Take it slow — listen to calm music, talk to a friend, or take a warm shower."
        }
    }
}
