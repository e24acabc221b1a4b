//! Keyword-tier urgency heuristic over raw call text.

use serde::{Deserialize, Serialize};

/// Discrete urgency tag attached to every processed call.
///
/// Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

const HIGH_TIER: &[&str] = &[
    "emergencia",
    "dolor",
    "urgente",
    "inmediato",
    "ayuda",
    "rápido",
];

const MEDIUM_TIER: &[&str] = &["no puedo", "mañana", "próximo"];

/// Assign an urgency tier to a transcript, highest tier first.
///
/// Matching is case-insensitive substring containment, not word-boundary
/// matching: a tier keyword inside a longer word still counts.
pub fn detect_urgency(text: &str) -> UrgencyLevel {
    let lower = text.to_lowercase();
    if HIGH_TIER.iter().any(|keyword| lower.contains(keyword)) {
        UrgencyLevel::High
    } else if MEDIUM_TIER.iter().any(|keyword| lower.contains(keyword)) {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}
