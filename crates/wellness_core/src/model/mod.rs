//! Domain records for tasks, moods, circles and classifications.
//!
//! # Responsibility
//! - Define the plain data shapes handed to the UI host.
//! - Keep label parsing and display formatting next to the types they serve.
//!
//! # Invariants
//! - Every task carries a stable `TaskId` from creation onward.
//! - Mood entries are never mutated after they are logged.

pub mod circle;
pub mod classification;
pub mod mood;
pub mod task;
