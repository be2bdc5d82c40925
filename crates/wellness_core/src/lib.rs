//! Core decision logic for the wellness dashboard.
//! UI hosts hold a `WellnessSession` and render what it returns.

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod rules;
pub mod service;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CircleConfig, WellnessConfig};
pub use error::{ConfigError, CoreError, CoreResult, RuleTableError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::circle::{Circle, CircleDefinition, JoinOutcome};
pub use model::classification::{ClassificationResult, RuleMatch, StressType};
pub use model::mood::{MoodCategory, MoodEntry, MoodPoint};
pub use model::task::{Task, TaskId, TaskProgress, TaskSummary};
pub use rules::{CompiledRules, KeywordRule, MatchMode, RuleTable};
pub use service::circle_registry::CircleRegistry;
pub use service::mood_log::MoodLog;
pub use service::task_store::TaskStore;
pub use service::text_classifier::TextClassifier;
pub use service::tips::{relief_plan, TipBook};
pub use session::{CheckIn, WellnessSession};

/// Minimal health-check API for host integration probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
