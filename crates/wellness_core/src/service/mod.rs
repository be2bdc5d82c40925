//! Session-scoped stores and pure classifiers.
//!
//! # Responsibility
//! - Own the in-memory state behind each dashboard panel.
//! - Validate caller input and mutate only on the success path.
//!
//! # Invariants
//! - No store locks or blocks; each is owned exclusively by one session.
//! - Diagnostic logs carry counts and categories, never user-entered text.

pub mod circle_registry;
pub mod mood_log;
pub mod task_store;
pub mod text_classifier;
pub mod tips;
