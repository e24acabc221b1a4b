//! CLI entry-point for processing a file of transcripts into a report.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    pipeline::{
        types::{CallInput, CallResult},
        CallPipeline,
    },
};

/// Args for the `batch` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// File with one transcript per line; blank lines are skipped.
    #[arg(long)]
    pub input: PathBuf,
}

/// Aggregated report persisted to the reports directory.
#[derive(Debug, Serialize)]
struct BatchReport {
    generated_at: DateTime<Utc>,
    total_calls: usize,
    categories: BTreeMap<String, usize>,
    urgencies: BTreeMap<String, usize>,
    calls: Vec<CallResult>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading transcripts from {}", args.input.display()))?;
    let pipeline = CallPipeline::from_settings(&settings)?;

    let mut calls = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        calls.push(pipeline.process(CallInput::text(line)).await);
    }

    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    let mut urgencies: BTreeMap<String, usize> = BTreeMap::new();
    for call in &calls {
        if let CallResult::Success { classification, .. } = call {
            *categories
                .entry(classification.category.as_str().to_string())
                .or_default() += 1;
            *urgencies
                .entry(classification.urgency.as_str().to_string())
                .or_default() += 1;
        }
    }

    let report = BatchReport {
        generated_at: Utc::now(),
        total_calls: calls.len(),
        categories,
        urgencies,
        calls,
    };
    let name = format!("analysis_{}.json", Utc::now().format("%Y%m%d_%H%M%S"));
    let path = settings.join_report(&name);
    fs::write(&path, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("writing report to {}", path.display()))?;
    info!(path = %path.display(), calls = report.total_calls, "wrote batch report");
    Ok(())
}
