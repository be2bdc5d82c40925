//! Mood log records and category labels.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const TIMESTAMP_DISPLAY_FORMAT: &str = "%H:%M:%S";

/// Self-reported mood bucket.
///
/// Ordering follows the chart level, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    Sad,
    Neutral,
    Happy,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 3] = [Self::Happy, Self::Neutral, Self::Sad];

    /// Ordinal used for the mood trend chart.
    pub fn level(self) -> u8 {
        match self {
            Self::Sad => 1,
            Self::Neutral => 2,
            Self::Happy => 3,
        }
    }

    /// Label shown on the mood picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "😊 Happy",
            Self::Neutral => "😐 Neutral",
            Self::Sad => "☹️ Sad",
        }
    }

    /// Parses a picker label or bare name, ignoring case and any leading
    /// emoji/punctuation.
    pub fn parse_label(value: &str) -> CoreResult<Self> {
        let name = value
            .trim()
            .trim_start_matches(|c: char| !c.is_alphabetic())
            .trim()
            .to_lowercase();
        match name.as_str() {
            "happy" => Ok(Self::Happy),
            "neutral" => Ok(Self::Neutral),
            "sad" => Ok(Self::Sad),
            _ => Err(CoreError::invalid(format!(
                "unknown mood `{}`; expected happy|neutral|sad",
                value.trim()
            ))),
        }
    }
}

/// One logged mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub timestamp: NaiveTime,
    pub category: MoodCategory,
    pub note: Option<String>,
}

impl MoodEntry {
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_DISPLAY_FORMAT).to_string()
    }
}

/// Chart sample derived from one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPoint {
    pub timestamp: NaiveTime,
    pub level: u8,
}
