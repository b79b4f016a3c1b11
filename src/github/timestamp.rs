//! Timestamp handling for the fixed ISO-8601 form used by the GitHub API.
//!
//! GitHub renders every timestamp as `YYYY-MM-DDTHH:MM:SSZ`. Values that do
//! not parse are surfaced as `None` rather than as errors; callers decide
//! where an absent timestamp sorts or whether it is excluded.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout of timestamps sent to and received from the API.
pub const ISO_FORM: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parsing layout; accepts an optional fractional-second component.
const ISO_PARSE_FORM: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parses a timestamp in the fixed UTC form.
///
/// # Example
///
/// ```
/// use ghreport::github::timestamp::parse_timestamp;
///
/// assert!(parse_timestamp("2024-03-01T10:00:00Z").is_some());
/// assert!(parse_timestamp("").is_none());
/// ```
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, ISO_PARSE_FORM)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Renders a timestamp in the fixed UTC form used for query variables.
#[must_use]
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.format(ISO_FORM).to_string()
}

/// Whole days elapsed between `earlier` and `now`, truncated toward zero.
#[must_use]
pub fn days_between(earlier: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - earlier).num_days()
}
