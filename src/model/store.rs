//! JSON artifact persistence for fitted model components.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// File name of the persisted vectorizer artifact.
pub const VECTORIZER_ARTIFACT: &str = "vectorizer.json";
/// File name of the persisted classifier artifact.
pub const CLASSIFIER_ARTIFACT: &str = "classifier.json";

/// Failure while reading or writing a model artifact.
///
/// `Corrupt` means the artifact exists but no longer parses; retraining over
/// it would silently mask the damage, so callers surface it instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on artifact {name}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("artifact {name} is corrupt")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Directory-backed store for serialized model artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Read and deserialize one artifact.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let raw = fs::read_to_string(self.path(name)).map_err(|source| StoreError::Io {
            name: name.to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            name: name.to_string(),
            source,
        })
    }

    /// Serialize one artifact to pretty JSON, creating the directory if needed.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            name: name.to_string(),
            source,
        })?;
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::Corrupt {
            name: name.to_string(),
            source,
        })?;
        let path = self.path(name);
        fs::write(&path, raw).map_err(|source| StoreError::Io {
            name: name.to_string(),
            source,
        })?;
        info!(path = %path.display(), "saved artifact");
        Ok(())
    }
}
