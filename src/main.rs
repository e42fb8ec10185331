//! PBDB smoke runner.
//!
//! Runs the taxon, occurrence and interval lookups in order and prints the
//! results to stdout. The first failure ends the run with a non-zero exit.

use std::io;
use std::process::ExitCode;

use paleodb::{default_checks, report, run_all, Error, PaleoDbClient};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the diagnostics
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paleodb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Smoke run failed");
            let _ = report::write_failure(&mut io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let client = PaleoDbClient::from_env()?;
    info!(base_url = client.transport().base_url(), "Starting PBDB smoke run");

    let mut stdout = io::stdout().lock();
    let summaries = run_all(&client, &default_checks(), &mut stdout).await?;

    info!(checks = summaries.len(), "Smoke run complete");
    Ok(())
}
