//! Core error taxonomy.
//!
//! # Responsibility
//! - Define the caller-facing failures for store and session operations.
//! - Keep rule-table and config failures separate from per-call validation.
//!
//! # Invariants
//! - A store returning an error has not been mutated by that call.
//! - Classification never produces an error; it always has a fallback.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CoreResult<T> = Result<T, CoreError>;

/// Validation failures surfaced to the UI host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Blank required text or an unrecognized label/name.
    InvalidArgument(String),
    /// Task position outside the current list bounds.
    IndexOutOfRange { index: usize, len: usize },
}

impl CoreError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl Error for CoreError {}

/// Rule table and roster validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTableError {
    /// A rule declares no keywords and could never match.
    EmptyKeywords { rule_index: usize },
    /// A keyword is blank after trim.
    BlankKeyword { rule_index: usize },
    /// Word matcher could not be built for a keyword (regex size limits).
    InvalidPattern { keyword: String, message: String },
    /// A rule or fallback targets a circle that is not on the roster.
    UnknownCircle(String),
    /// Two roster entries share one name.
    DuplicateCircle(String),
    /// A roster entry has a blank name.
    BlankCircleName,
}

impl Display for RuleTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKeywords { rule_index } => {
                write!(f, "rule {rule_index} must declare at least one keyword")
            }
            Self::BlankKeyword { rule_index } => {
                write!(f, "rule {rule_index} contains a blank keyword")
            }
            Self::InvalidPattern { keyword, message } => {
                write!(f, "keyword `{keyword}` cannot be matched as a word: {message}")
            }
            Self::UnknownCircle(name) => write!(f, "circle is not on the roster: {name}"),
            Self::DuplicateCircle(name) => write!(f, "circle is listed twice: {name}"),
            Self::BlankCircleName => write!(f, "circle name must not be blank"),
        }
    }
}

impl Error for RuleTableError {}

/// Configuration load failures.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Rules(RuleTableError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Rules(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Rules(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RuleTableError> for ConfigError {
    fn from(value: RuleTableError) -> Self {
        Self::Rules(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreError, RuleTableError};
    use std::error::Error;

    #[test]
    fn index_error_names_bounds() {
        let err = CoreError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of range for list of length 2");
    }

    #[test]
    fn config_error_exposes_rule_source() {
        let err = ConfigError::from(RuleTableError::UnknownCircle("Night Owls".to_string()));
        let source = err.source().expect("rule error should be the source");
        assert!(source.to_string().contains("Night Owls"));
    }
}
