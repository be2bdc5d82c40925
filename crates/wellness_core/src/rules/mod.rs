//! Keyword rule tables.
//!
//! # Responsibility
//! - Hold ordered `(keywords, category)` rules as plain, serializable data.
//! - Compile tables into matchers used by the classifier and circle registry.
//! - Ship the canonical built-in tables.
//!
//! # Invariants
//! - Rules are evaluated in declaration order; the first hit wins.
//! - Matching is case-insensitive; keywords are lower-cased at compile time.
//! - No match resolves to the table's fallback, never to an error.

pub mod defaults;
pub mod table;

pub use table::{CompiledRules, KeywordRule, MatchMode, RuleTable};
