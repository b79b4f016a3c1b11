//! Report run handler.

use std::io;

use ghreport::github::locator::resolve_api_base;
use ghreport::report::Report;
use ghreport::telemetry::TracingLog;
use ghreport::{OctocrabActivityGateway, ReportConfig, ReportError};

use super::output::write_digest;

/// Runs the configured report and writes the digest to stdout.
///
/// # Errors
///
/// Returns a configuration error when the organisation, token, or API base
/// is missing or invalid, and the run error when the report fails.
pub async fn run(config: &ReportConfig) -> Result<(), ReportError> {
    let organization = config.require_organization()?;
    let token = config.resolve_token()?;
    let api_base = resolve_api_base(&config.api_base)?;

    let gateway =
        OctocrabActivityGateway::for_token(&token, api_base.as_str(), config.request_timeout())?;
    let mut report = Report::new(&gateway, organization, config.duration_days)
        .with_policy(config.listing_policy())
        .with_log(TracingLog);

    report.run().await?;

    let now = report.report_date().unwrap_or_else(chrono::Utc::now);
    let mut stdout = io::stdout().lock();
    write_digest(
        &mut stdout,
        report.organization().as_str(),
        report.result(),
        now,
        config.highlights,
    )
}
