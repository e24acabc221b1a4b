//! CLI entry-point for retraining the intent model.

use anyhow::Result;
use tracing::instrument;

use crate::{
    config::Settings,
    model::{store::ArtifactStore, IntentModel},
};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let store = ArtifactStore::new(&settings.model_dir);
    IntentModel::retrain(&store, settings.max_vocabulary)?;
    Ok(())
}
