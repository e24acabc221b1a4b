//! Result records produced for each processed call.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::entities::EntitySet;
use crate::analysis::intent::Category;
use crate::analysis::urgency::UrgencyLevel;

/// Maximum characters kept in a summary excerpt.
const EXCERPT_CHARS: usize = 200;

/// One call to process: an audio reference, raw text, or both.
///
/// Audio takes precedence when both are set; its transcription replaces the
/// inline text.
#[derive(Debug, Clone, Default)]
pub struct CallInput {
    pub audio: Option<PathBuf>,
    pub text: Option<String>,
}

impl CallInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            audio: None,
            text: Some(text.into()),
        }
    }

    pub fn audio(path: impl Into<PathBuf>) -> Self {
        Self {
            audio: Some(path.into()),
            text: None,
        }
    }
}

/// Intent and urgency read off one utterance.
///
/// `category` and `confidence` always come from the same classifier call so
/// the label and its probability cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub confidence: f64,
    pub urgency: UrgencyLevel,
}

/// Compact digest of the processed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSummary {
    pub excerpt: String,
    pub word_count: usize,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

impl CallSummary {
    /// Truncate the text to 200 characters with an ellipsis marker and count
    /// whitespace-separated words.
    pub fn build(text: &str, category: Category) -> Self {
        let excerpt = if text.chars().count() > EXCERPT_CHARS {
            let head: String = text.chars().take(EXCERPT_CHARS).collect();
            format!("{head}...")
        } else {
            text.to_string()
        };
        Self {
            excerpt,
            word_count: text.split_whitespace().count(),
            category,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of one pipeline pass, tagged by status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallResult {
    Success {
        transcription: String,
        classification: Classification,
        entities: EntitySet,
        summary: CallSummary,
        timestamp: DateTime<Utc>,
    },
    Failed {
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl CallResult {
    pub fn failed(error: impl Into<String>) -> Self {
        CallResult::Failed {
            error: error.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CallResult::Success { .. })
    }
}
