//! Intent classification over transcribed call text.

use std::sync::Arc;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::model::IntentModel;

/// Minimum characters (after trimming) before the model is consulted.
const MIN_TEXT_CHARS: usize = 3;

/// Intent category of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Appointment,
    Cancellation,
    Urgency,
    Inquiry,
    Complaint,
    Treatment,
    /// Degenerate-input sentinel, never trained.
    Unclassified,
}

impl Category {
    /// Trainable categories in class-index order.
    pub const TRAINABLE: [Category; 6] = [
        Category::Appointment,
        Category::Cancellation,
        Category::Urgency,
        Category::Inquiry,
        Category::Complaint,
        Category::Treatment,
    ];

    pub fn class_index(self) -> Option<usize> {
        Self::TRAINABLE.iter().position(|c| *c == self)
    }

    pub fn from_class_index(index: usize) -> Category {
        Self::TRAINABLE
            .get(index)
            .copied()
            .unwrap_or(Category::Unclassified)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Appointment => "appointment",
            Category::Cancellation => "cancellation",
            Category::Urgency => "urgency",
            Category::Inquiry => "inquiry",
            Category::Complaint => "complaint",
            Category::Treatment => "treatment",
            Category::Unclassified => "unclassified",
        }
    }
}

/// Category plus the probability the model assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: Category,
    pub confidence: f64,
}

/// Classifier over a shared, read-only intent model.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    model: Arc<IntentModel>,
}

impl IntentClassifier {
    pub fn new(model: Arc<IntentModel>) -> Self {
        Self { model }
    }

    /// Classify one utterance.
    ///
    /// Text shorter than three characters after trimming never reaches the
    /// model and comes back as `Unclassified` with zero confidence.
    /// Confidence is the argmax class probability rounded to three digits.
    pub fn classify(&self, text: &str) -> Prediction {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            return Prediction {
                category: Category::Unclassified,
                confidence: 0.0,
            };
        }
        let features = self.model.vectorizer.transform(text);
        let probabilities = self.model.classifier.predict_probabilities(&features);
        let (index, probability) = argmax(&probabilities);
        Prediction {
            category: Category::from_class_index(index),
            confidence: (probability * 1000.0).round() / 1000.0,
        }
    }
}

/// First maximum wins, so equal probabilities resolve to the lowest class index.
fn argmax(values: &Array1<f64>) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (index, &value) in values.iter().enumerate() {
        if value > best.1 {
            best = (index, value);
        }
    }
    best
}
