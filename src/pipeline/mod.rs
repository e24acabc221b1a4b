//! Call processing pipeline: transcribe, classify, extract, summarize.

pub mod transcribe;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::analysis::{entities, intent::IntentClassifier, urgency};
use crate::config::Settings;
use crate::model::{store::ArtifactStore, IntentModel};
use transcribe::Transcriber;
use types::{CallInput, CallResult, CallSummary, Classification};

/// Failure message for calls that arrive with no usable text.
const NO_TEXT_ERROR: &str = "no text to process";

/// Stateless orchestrator over the shared model and transcription backend.
///
/// Each `process` call is independent; concurrent calls share the read-only
/// model without locking.
pub struct CallPipeline {
    intent: IntentClassifier,
    transcriber: Arc<dyn Transcriber>,
}

impl CallPipeline {
    pub fn new(model: Arc<IntentModel>, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            intent: IntentClassifier::new(model),
            transcriber,
        }
    }

    /// Wire up a pipeline from settings. The transcription backend is
    /// checked first so configuration errors surface before any training
    /// work starts.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transcriber = transcribe::from_settings(settings)?;
        let store = ArtifactStore::new(&settings.model_dir);
        let model = IntentModel::load_or_train(&store, settings.max_vocabulary)?;
        Ok(Self::new(Arc::new(model), transcriber))
    }

    /// Process one call through to a terminal result.
    ///
    /// Failures come back as a `Failed` result rather than an error so batch
    /// callers can keep going. When audio is present its transcription
    /// replaces any inline text.
    pub async fn process(&self, input: CallInput) -> CallResult {
        let text = if let Some(audio) = &input.audio {
            match self.transcriber.transcribe(audio).await {
                Ok(text) => text,
                Err(err) => {
                    warn!(audio = %audio.display(), error = %err, "transcription failed");
                    return CallResult::failed(err.to_string());
                }
            }
        } else {
            input.text.unwrap_or_default()
        };

        if text.trim().is_empty() {
            return CallResult::failed(NO_TEXT_ERROR);
        }

        let prediction = self.intent.classify(&text);
        let urgency = urgency::detect_urgency(&text);
        let entities = entities::extract(&text);
        let summary = CallSummary::build(&text, prediction.category);
        info!(
            category = prediction.category.as_str(),
            confidence = prediction.confidence,
            urgency = urgency.as_str(),
            "processed call"
        );
        CallResult::Success {
            transcription: text,
            classification: Classification {
                category: prediction.category,
                confidence: prediction.confidence,
                urgency,
            },
            entities,
            summary,
            timestamp: Utc::now(),
        }
    }
}
