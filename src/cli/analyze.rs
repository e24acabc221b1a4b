//! CLI entry-point for interpreting a single call.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    pipeline::{types::CallInput, CallPipeline},
};

/// Args for the `analyze` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Transcript text to interpret.
    #[arg(long)]
    pub text: Option<String>,
    /// Audio file to transcribe before interpretation.
    #[arg(long)]
    pub audio: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let pipeline = CallPipeline::from_settings(&settings)?;
    let input = CallInput {
        audio: args.audio,
        text: args.text,
    };
    let result = pipeline.process(input).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
