//! Entry point wiring CLI dispatch to pipeline modules.

use anyhow::Result;
use call_triage::cli::Cli;
use call_triage::config::Settings;
use call_triage::logging;
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
