//! Session configuration: rule tables, circle roster and tips.
//!
//! # Responsibility
//! - Describe every tunable table as serializable data.
//! - Load and validate JSON documents before any store is built from them.
//!
//! # Invariants
//! - A section missing from the document keeps its built-in default.
//! - A config returned by a loader has passed `validate()`.

use crate::error::{ConfigError, RuleTableError};
use crate::model::circle::CircleDefinition;
use crate::model::classification::StressType;
use crate::model::mood::MoodCategory;
use crate::rules::defaults;
use crate::rules::{CompiledRules, RuleTable};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Circle roster plus the recommendation rules that point into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub roster: Vec<CircleDefinition>,
    pub rules: RuleTable<String>,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            roster: defaults::circle_roster(),
            rules: defaults::circle_rules(),
        }
    }
}

impl CircleConfig {
    /// Checks roster names and that every rule target is on the roster.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        self.compile_rules().map(|_| ())
    }

    /// Validates the roster, then builds the recommendation matcher.
    pub fn compile_rules(&self) -> Result<CompiledRules<String>, RuleTableError> {
        let mut names = BTreeSet::new();
        for circle in &self.roster {
            let name = circle.name.trim();
            if name.is_empty() {
                return Err(RuleTableError::BlankCircleName);
            }
            if !names.insert(name) {
                return Err(RuleTableError::DuplicateCircle(name.to_string()));
            }
        }

        let targets = self
            .rules
            .rules
            .iter()
            .map(|rule| &rule.category)
            .chain(std::iter::once(&self.rules.fallback));
        for target in targets {
            if !names.contains(target.as_str()) {
                return Err(RuleTableError::UnknownCircle(target.clone()));
            }
        }

        self.rules.compile()
    }
}

/// Full configuration for one wellness session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessConfig {
    pub mood_rules: RuleTable<MoodCategory>,
    pub stress_rules: RuleTable<StressType>,
    pub circles: CircleConfig,
    pub tips: Vec<String>,
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            mood_rules: defaults::mood_rules(),
            stress_rules: defaults::stress_rules(),
            circles: CircleConfig::default(),
            tips: defaults::daily_tips(),
        }
    }
}

impl WellnessConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    /// - `Parse` for malformed JSON or unknown enum values.
    /// - `Rules` when a table or the roster fails validation.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        info!(
            "event=config_load module=config status=ok mood_rules={} stress_rules={} circles={} tips={}",
            config.mood_rules.rules.len(),
            config.stress_rules.rules.len(),
            config.circles.roster.len(),
            config.tips.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RuleTableError> {
        self.mood_rules.compile()?;
        self.stress_rules.compile()?;
        self.circles.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{CircleConfig, WellnessConfig};
    use crate::error::{ConfigError, RuleTableError};

    #[test]
    fn default_config_is_valid() {
        WellnessConfig::default()
            .validate()
            .expect("built-in tables should validate");
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = WellnessConfig::from_json_str("{}").expect("empty object");
        assert_eq!(config, WellnessConfig::default());
    }

    #[test]
    fn rejects_rule_targeting_unknown_circle() {
        let raw = r#"{
            "circles": {
                "roster": [{ "name": "Calm Minds", "topic": "Mindfulness" }],
                "rules": {
                    "rules": [{ "category": "Night Owls", "keywords": ["insomnia"] }],
                    "fallback": "Calm Minds"
                }
            }
        }"#;
        let err = WellnessConfig::from_json_str(raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Rules(RuleTableError::UnknownCircle(ref name)) if name == "Night Owls"
        ));
    }

    #[test]
    fn compile_rules_returns_a_ready_matcher() {
        let rules = CircleConfig::default()
            .compile_rules()
            .expect("default circle config");
        assert_eq!(rules.resolve("exam week"), "Stress Support Circle");
        assert_eq!(rules.fallback(), "Calm Minds");

        let mut config = CircleConfig::default();
        config.rules.fallback = "Night Owls".to_string();
        assert_eq!(
            config.compile_rules().unwrap_err(),
            RuleTableError::UnknownCircle("Night Owls".to_string())
        );
    }

    #[test]
    fn rejects_unknown_mood_category() {
        let raw = r#"{
            "mood_rules": {
                "rules": [{ "category": "ecstatic", "keywords": ["wow"] }],
                "fallback": "neutral"
            }
        }"#;
        let err = WellnessConfig::from_json_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
