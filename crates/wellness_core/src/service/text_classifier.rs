//! Free-text mood and stress classification.
//!
//! # Responsibility
//! - Map free text to a `MoodCategory` or `StressType` via ordered keyword
//!   rule tables.
//!
//! # Invariants
//! - Pure: identical text and tables always yield the identical result.
//! - Never fails; unmatched or blank text resolves to the table fallback.
//! - Rule order is honored as written. With the built-in mood table a text
//!   holding both happy and sad words classifies as Happy.

use crate::error::RuleTableError;
use crate::model::classification::{ClassificationResult, StressType};
use crate::model::mood::MoodCategory;
use crate::rules::{defaults, CompiledRules, RuleTable};
use log::debug;

#[derive(Debug, Clone)]
pub struct TextClassifier {
    mood: CompiledRules<MoodCategory>,
    stress: CompiledRules<StressType>,
}

impl TextClassifier {
    pub fn from_tables(
        mood_rules: &RuleTable<MoodCategory>,
        stress_rules: &RuleTable<StressType>,
    ) -> Result<Self, RuleTableError> {
        Ok(Self {
            mood: mood_rules.compile()?,
            stress: stress_rules.compile()?,
        })
    }

    pub fn classify_mood(&self, free_text: &str) -> ClassificationResult<MoodCategory> {
        let result = self.mood.classify(free_text);
        debug!(
            "event=classify module=text_classifier kind=mood category={:?} rule={:?}",
            result.category,
            result.matched.as_ref().map(|hit| hit.rule_index)
        );
        result
    }

    pub fn classify_stress_type(&self, free_text: &str) -> ClassificationResult<StressType> {
        let result = self.stress.classify(free_text);
        debug!(
            "event=classify module=text_classifier kind=stress category={:?} rule={:?}",
            result.category,
            result.matched.as_ref().map(|hit| hit.rule_index)
        );
        result
    }
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::from_tables(&defaults::mood_rules(), &defaults::stress_rules())
            .expect("built-in classifier tables are valid")
    }
}
