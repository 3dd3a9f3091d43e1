use anyhow::Context;
use clap::Parser;
use formpipe::{cli, logging};

#[tokio::main]
async fn main() -> formpipe::Result<()> {
    let args = cli::Args::parse();
    let guard = logging::init(&args.command).context("failed to initialize logging")?;
    tracing::debug!(
        console = %guard.console_output(),
        log_file = %guard.log_file_path().display(),
        "logging initialized"
    );
    cli::run(args).await
}
