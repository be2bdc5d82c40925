//! Peer support circle records.

use serde::{Deserialize, Serialize};

/// Roster entry used to seed a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleDefinition {
    pub name: String,
    pub topic: String,
    #[serde(default)]
    pub members: Vec<String>,
    /// Anonymous members counted in the circle size but not listed by name.
    #[serde(default)]
    pub seed_count: usize,
}

impl CircleDefinition {
    pub fn new(name: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: topic.into(),
            members: Vec::new(),
            seed_count: 0,
        }
    }

    pub fn with_seed_count(mut self, seed_count: usize) -> Self {
        self.seed_count = seed_count;
        self
    }
}

/// Live circle with its current membership, in join order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub name: String,
    pub topic: String,
    pub members: Vec<String>,
    pub seed_count: usize,
}

impl Circle {
    pub fn has_member(&self, member_name: &str) -> bool {
        self.members.iter().any(|member| member == member_name)
    }

    /// Circle size shown on the roster: seeded members plus named joins.
    pub fn member_count(&self) -> usize {
        self.seed_count + self.members.len()
    }
}

/// Successful join outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinOutcome {
    Joined,
    AlreadyMember,
}
