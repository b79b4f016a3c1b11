//! Rate limit information from GitHub GraphQL responses.
//!
//! Every query issued by the report asks for the `rateLimit` object alongside
//! its payload. The values are read-only telemetry: they are reported through
//! the logging sink after each call and never change control flow.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::timestamp::parse_timestamp;

/// Rate limit information returned with a GraphQL response.
///
/// # Example
///
/// ```
/// use ghreport::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 1, 4999, None);
/// assert_eq!(info.telemetry_line(), "Credits remaining 4999");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Maximum points allowed in the current window.
    limit: u32,
    /// Points consumed by the query that carried this information.
    cost: u32,
    /// Remaining points in the current window.
    remaining: u32,
    /// When the window resets, if GitHub sent a parseable timestamp.
    reset_at: Option<DateTime<Utc>>,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(
        limit: u32,
        cost: u32,
        remaining: u32,
        reset_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            limit,
            cost,
            remaining,
            reset_at,
        }
    }

    /// Returns the maximum points allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the cost of the query that reported this information.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns the remaining points in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns when the rate limit window resets.
    #[must_use]
    pub const fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset_at
    }

    /// Line reported through the logging sink after each API call.
    #[must_use]
    pub fn telemetry_line(&self) -> String {
        format!("Credits remaining {}", self.remaining)
    }
}

/// `rateLimit` object as returned by the GraphQL API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiRateLimit {
    #[serde(default)]
    pub(crate) limit: u32,
    #[serde(default)]
    pub(crate) cost: u32,
    #[serde(default)]
    pub(crate) remaining: u32,
    pub(crate) reset_at: Option<String>,
}

impl From<ApiRateLimit> for RateLimitInfo {
    fn from(value: ApiRateLimit) -> Self {
        Self::new(
            value.limit,
            value.cost,
            value.remaining,
            value.reset_at.as_deref().and_then(parse_timestamp),
        )
    }
}
