//! Peer support circle membership and recommendation.
//!
//! # Responsibility
//! - Seed circles from a validated roster.
//! - Join members idempotently and recommend a circle from free text.
//!
//! # Invariants
//! - A member name appears at most once per circle (case-sensitive).
//! - The circle set is fixed after construction; only membership changes.
//! - Every recommendation target is a roster circle.

use crate::config::CircleConfig;
use crate::error::{CoreError, CoreResult, RuleTableError};
use crate::model::circle::{Circle, JoinOutcome};
use crate::model::classification::ClassificationResult;
use crate::rules::CompiledRules;
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct CircleRegistry {
    circles: Vec<Circle>,
    rules: CompiledRules<String>,
}

impl CircleRegistry {
    /// Builds a registry from a roster and its recommendation rules.
    ///
    /// Seed members are trimmed, blank ones skipped and duplicates collapsed.
    pub fn from_config(config: &CircleConfig) -> Result<Self, RuleTableError> {
        let rules = config.compile_rules()?;
        let circles = config
            .roster
            .iter()
            .map(|definition| {
                let mut circle = Circle {
                    name: definition.name.trim().to_string(),
                    topic: definition.topic.clone(),
                    members: Vec::new(),
                    seed_count: definition.seed_count,
                };
                for member in &definition.members {
                    let member = member.trim();
                    if !member.is_empty() && !circle.has_member(member) {
                        circle.members.push(member.to_string());
                    }
                }
                circle
            })
            .collect();
        Ok(Self { circles, rules })
    }

    /// Adds `member_name` to `circle_name`.
    ///
    /// # Errors
    /// - `InvalidArgument` when the circle is not on the roster or the member
    ///   name is blank.
    pub fn join(&mut self, circle_name: &str, member_name: &str) -> CoreResult<JoinOutcome> {
        let member_name = member_name.trim();
        if member_name.is_empty() {
            return Err(CoreError::invalid("member name must not be blank"));
        }
        let circle = self
            .circles
            .iter_mut()
            .find(|circle| circle.name == circle_name)
            .ok_or_else(|| CoreError::invalid(format!("unknown circle: {circle_name}")))?;

        if circle.has_member(member_name) {
            debug!("event=circle_join module=circle_registry status=already_member");
            return Ok(JoinOutcome::AlreadyMember);
        }
        circle.members.push(member_name.to_string());
        info!(
            "event=circle_join module=circle_registry status=joined members={}",
            circle.members.len()
        );
        Ok(JoinOutcome::Joined)
    }

    /// Recommends a circle name for free text, or the designated fallback.
    pub fn recommend(&self, free_text: &str) -> &str {
        self.rules.resolve(free_text).as_str()
    }

    /// Same as `recommend`, reporting the rule that fired.
    pub fn recommend_detailed(&self, free_text: &str) -> ClassificationResult<String> {
        self.rules.classify(free_text)
    }

    pub fn fallback_circle(&self) -> &str {
        self.rules.fallback().as_str()
    }

    pub fn circle(&self, name: &str) -> Option<&Circle> {
        self.circles.iter().find(|circle| circle.name == name)
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn members(&self, name: &str) -> Option<&[String]> {
        self.circle(name).map(|circle| circle.members.as_slice())
    }
}

impl Default for CircleRegistry {
    fn default() -> Self {
        Self::from_config(&CircleConfig::default()).expect("built-in circle roster is valid")
    }
}
