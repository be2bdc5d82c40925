//! Append-only mood log with chart aggregates.
//!
//! # Invariants
//! - Entries stay in the order they were logged.
//! - `series()` and `summary()` are recomputed on every call.

use crate::clock::{Clock, SystemClock};
use crate::error::CoreResult;
use crate::model::mood::{MoodCategory, MoodEntry, MoodPoint};
use log::info;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct MoodLog<C: Clock = SystemClock> {
    clock: C,
    entries: Vec<MoodEntry>,
}

impl Default for MoodLog<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> MoodLog<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            entries: Vec::new(),
        }
    }

    /// Appends an entry stamped with the current time.
    ///
    /// A blank `note` is stored as `None`.
    pub fn log_mood(&mut self, category: MoodCategory, note: Option<&str>) -> MoodEntry {
        let note = note
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let entry = MoodEntry {
            timestamp: self.clock.now().time(),
            category,
            note,
        };
        self.entries.push(entry.clone());
        info!(
            "event=mood_logged module=mood_log category={:?} has_note={} total={}",
            category,
            entry.note.is_some(),
            self.entries.len()
        );
        entry
    }

    /// Parses a picker label, then logs it.
    ///
    /// # Errors
    /// - `InvalidArgument` for an unknown label; the log is left unchanged.
    pub fn log_mood_label(&mut self, label: &str, note: Option<&str>) -> CoreResult<MoodEntry> {
        let category = MoodCategory::parse_label(label)?;
        Ok(self.log_mood(category, note))
    }

    /// Count per category; every category is present.
    pub fn summary(&self) -> BTreeMap<MoodCategory, usize> {
        let mut counts: BTreeMap<MoodCategory, usize> =
            MoodCategory::ALL.iter().map(|category| (*category, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.category).or_insert(0) += 1;
        }
        counts
    }

    /// Chart samples in log order.
    pub fn series(&self) -> Vec<MoodPoint> {
        self.entries
            .iter()
            .map(|entry| MoodPoint {
                timestamp: entry.timestamp,
                level: entry.category.level(),
            })
            .collect()
    }

    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        info!("event=moods_cleared module=mood_log removed={removed}");
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
