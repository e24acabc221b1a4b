//! Transcription collaborator turning audio references into text.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::Settings;

/// Failure reported while turning an audio reference into text.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("audio reference not found: {}", .0.display())]
    MissingAudio(PathBuf),
    /// Local I/O failure before the backend was contacted.
    #[error("could not read audio {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Message reported by the backend, passed through verbatim.
    #[error("{0}")]
    Service(String),
    #[error("transcription backend not configured")]
    Disabled,
}

/// Pluggable speech-to-text backend.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &Path) -> Result<String, TranscribeError>;
}

/// Backend that posts audio bytes to an external transcription service.
///
/// The service answers with `{"text": ...}` on success or `{"error": ...}`
/// on failure. A response with neither field transcribes to empty text,
/// which the pipeline rejects as unusable input.
pub struct HttpTranscriber {
    client: Client,
    endpoint: String,
}

impl HttpTranscriber {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent("call-triage/0.1").build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
    error: Option<String>,
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &Path) -> Result<String, TranscribeError> {
        if !audio.is_file() {
            return Err(TranscribeError::MissingAudio(audio.to_path_buf()));
        }
        let bytes = tokio::fs::read(audio)
            .await
            .map_err(|source| TranscribeError::Read {
                path: audio.to_path_buf(),
                source,
            })?;
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await?;
        let payload: TranscriptionResponse = response.json().await?;
        if let Some(error) = payload.error {
            return Err(TranscribeError::Service(error));
        }
        Ok(payload.text.unwrap_or_default())
    }
}

/// Placeholder used when no transcription endpoint is configured. Text-only
/// calls still work; audio calls fail with a clear message.
pub struct DisabledTranscriber;

#[async_trait]
impl Transcriber for DisabledTranscriber {
    async fn transcribe(&self, _audio: &Path) -> Result<String, TranscribeError> {
        Err(TranscribeError::Disabled)
    }
}

/// Build the transcription backend selected by `TRANSCRIBER_URL`.
pub fn from_settings(settings: &Settings) -> Result<Arc<dyn Transcriber>> {
    match settings.transcriber_url.as_deref() {
        Some(url) => {
            info!(endpoint = url, "using http transcription backend");
            Ok(Arc::new(HttpTranscriber::new(url)?) as Arc<dyn Transcriber>)
        }
        None => Ok(Arc::new(DisabledTranscriber) as Arc<dyn Transcriber>),
    }
}
