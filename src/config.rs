//! Runtime configuration utilities for call-triage.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding the persisted vectorizer/classifier artifacts.
    pub model_dir: PathBuf,
    /// Directory receiving batch analysis reports.
    pub reports_dir: PathBuf,
    /// Optional speech-to-text endpoint for audio inputs.
    pub transcriber_url: Option<String>,
    /// Upper bound on the vectorizer vocabulary size.
    pub max_vocabulary: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let model_dir = env::var("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./models"));
        let reports_dir = env::var("REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./reports"));
        let transcriber_url = env::var("TRANSCRIBER_URL").ok().filter(|v| !v.is_empty());
        let max_vocabulary = env::var("MAX_VOCABULARY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        std::fs::create_dir_all(&model_dir).context("creating model dir")?;
        std::fs::create_dir_all(&reports_dir).context("creating reports dir")?;

        Ok(Self {
            model_dir,
            reports_dir,
            transcriber_url,
            max_vocabulary,
        })
    }

    /// Convenience helper for derived report path segments.
    pub fn join_report<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.reports_dir.join(path)
    }
}
