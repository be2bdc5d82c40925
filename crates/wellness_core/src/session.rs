//! Per-session context owning one instance of every store.
//!
//! # Responsibility
//! - Give the UI host a single explicit handle instead of ambient globals.
//! - Reject blank free text before it reaches the classifiers.
//!
//! # Invariants
//! - Stores inside one session share the session clock.
//! - Nothing here outlives the session; there is no persistence.

use crate::clock::{Clock, SystemClock};
use crate::config::WellnessConfig;
use crate::error::{ConfigError, CoreError, CoreResult};
use crate::model::classification::StressType;
use crate::model::mood::MoodCategory;
use crate::service::circle_registry::CircleRegistry;
use crate::service::mood_log::MoodLog;
use crate::service::task_store::TaskStore;
use crate::service::text_classifier::TextClassifier;
use crate::service::tips::{relief_plan, TipBook};
use serde::Serialize;

/// Combined reading of one free-text check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIn {
    pub mood: MoodCategory,
    pub stress: StressType,
    pub relief_plan: &'static str,
    pub suggestion: &'static str,
    pub circle: String,
}

pub struct WellnessSession<C: Clock + Clone = SystemClock> {
    clock: C,
    pub tasks: TaskStore<C>,
    pub moods: MoodLog<C>,
    pub circles: CircleRegistry,
    pub classifier: TextClassifier,
    pub tips: TipBook,
}

impl Default for WellnessSession<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock + Clone> WellnessSession<C> {
    /// Creates a session with the built-in tables.
    pub fn new(clock: C) -> Self {
        Self {
            tasks: TaskStore::new(clock.clone()),
            moods: MoodLog::new(clock.clone()),
            circles: CircleRegistry::default(),
            classifier: TextClassifier::default(),
            tips: TipBook::default(),
            clock,
        }
    }

    /// Creates a session from a loaded config.
    ///
    /// # Errors
    /// - `Rules` when a table or the roster is invalid.
    pub fn from_config(config: &WellnessConfig, clock: C) -> Result<Self, ConfigError> {
        let classifier = TextClassifier::from_tables(&config.mood_rules, &config.stress_rules)?;
        let circles = CircleRegistry::from_config(&config.circles)?;
        // A tip list with nothing usable keeps the built-in tips.
        let tips = TipBook::new(config.tips.clone()).unwrap_or_default();
        Ok(Self {
            tasks: TaskStore::new(clock.clone()),
            moods: MoodLog::new(clock.clone()),
            circles,
            classifier,
            tips,
            clock,
        })
    }

    pub fn daily_tip(&self) -> &str {
        self.tips.tip_at(self.clock.now())
    }

    /// Reads mood, stress type, plan and circle from one free-text note.
    ///
    /// # Errors
    /// - `InvalidArgument` when `free_text` is blank.
    pub fn check_in(&self, free_text: &str) -> CoreResult<CheckIn> {
        if free_text.trim().is_empty() {
            return Err(CoreError::invalid("tell us a little about how you feel"));
        }
        let mood = self.classifier.classify_mood(free_text).category;
        let stress = self.classifier.classify_stress_type(free_text).category;
        Ok(CheckIn {
            mood,
            stress,
            relief_plan: relief_plan(mood),
            suggestion: stress.suggestion(),
            circle: self.circles.recommend(free_text).to_string(),
        })
    }
}
