//! Logging sink injected into a report run.
//!
//! The report engine writes human-readable telemetry lines (credits
//! remaining, bucket counts, failure context) to a [`ReportLog`]. Sinks are
//! best-effort: they cannot fail the run. Structured diagnostics go through
//! `tracing` independently of the sink.

use crate::github::rate_limit::RateLimitInfo;

/// Receives telemetry lines emitted by a report run.
pub trait ReportLog: Send + Sync {
    /// Records one telemetry line.
    fn log(&self, line: &str);
}

/// Sink that discards every line. Used when no sink is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl ReportLog for NoopLog {
    fn log(&self, _line: &str) {}
}

/// Sink forwarding each line to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ReportLog for TracingLog {
    fn log(&self, line: &str) {
        tracing::info!(target: "ghreport::report", "{line}");
    }
}

impl<F> ReportLog for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, line: &str) {
        self(line);
    }
}

/// Emits the credits line for an API call that reported its rate limit.
pub(crate) fn report_rate_limit(sink: &dyn ReportLog, rate_limit: Option<&RateLimitInfo>) {
    let Some(info) = rate_limit else {
        tracing::debug!("response carried no rate limit information");
        return;
    };

    tracing::debug!(
        limit = info.limit(),
        cost = info.cost(),
        remaining = info.remaining(),
        reset_at = ?info.reset_at(),
        "GitHub GraphQL rate limit"
    );
    sink.log(&info.telemetry_line());
}
