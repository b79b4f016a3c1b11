//! `ghreport` CLI entrypoint: weekly pull request activity digest for a
//! GitHub organisation.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ghreport::{ReportConfig, ReportError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directives.
const LOG_ENV: &str = "GHREPORT_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReportError> {
    let config = load_config()?;
    cli::report::run(&config).await
}

/// Installs a stderr `fmt` subscriber. Report telemetry is shown by default.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("ghreport=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReportConfig, ReportError> {
    ReportConfig::load().map_err(|error| ReportError::Configuration {
        message: error.to_string(),
    })
}
