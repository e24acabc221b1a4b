//! Pattern-based entity extraction from call transcripts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured facts pulled out of one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub dates: Vec<String>,
    pub contact: ContactInfo,
    pub treatments: Vec<String>,
    pub numbers: Vec<String>,
}

/// Phone numbers and e-mail addresses mentioned in a transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phones: Vec<String>,
    pub emails: Vec<String>,
}

/// Dental procedures recognised by the treatment extractor, in report order.
pub const TREATMENT_TERMS: &[&str] = &[
    "endodoncia",
    "ortodoncia",
    "limpiar",
    "blanqueamiento",
    "implante",
    "corona",
];

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b(?:enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|octubre|noviembre|diciembre)\b",
    )
    .expect("valid regex")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{7,10}\b").expect("valid regex"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").expect("valid regex"));

/// Run every extractor over the raw text.
///
/// Extraction never fails; a kind with no matches reports an empty list. The
/// same digits may legitimately show up under more than one field (a phone
/// number is also a number).
pub fn extract(text: &str) -> EntitySet {
    EntitySet {
        dates: find_all(&DATE_PATTERN, text),
        contact: ContactInfo {
            phones: find_all(&PHONE_PATTERN, text),
            emails: find_all(&EMAIL_PATTERN, text),
        },
        treatments: find_treatments(text),
        numbers: find_all(&NUMBER_PATTERN, text),
    }
}

/// All non-overlapping matches in order of appearance, original casing kept.
fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|hit| hit.as_str().to_string())
        .collect()
}

/// Treatment vocabulary hits, in vocabulary order rather than text order.
fn find_treatments(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TREATMENT_TERMS
        .iter()
        .copied()
        .filter(|term| lower.contains(term))
        .map(str::to_string)
        .collect()
}
