//! Error types exposed by the GitHub transport and report layers.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Failures of a single GraphQL round trip.
///
/// Every variant is fatal to the report run that issued the request; none of
/// them is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body or status detail describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("{operation} timed out after {seconds}s")]
    Timeout {
        /// Operation that was in flight.
        operation: String,
        /// Configured timeout in seconds.
        seconds: u64,
    },

    /// The GraphQL endpoint answered with an `errors` payload.
    #[error("{operation} returned GraphQL errors: {}", messages.join("; "))]
    GraphQl {
        /// Operation that was in flight.
        operation: String,
        /// Messages from the `errors` array, in response order.
        messages: Vec<String>,
    },

    /// The GraphQL response carried neither `data` nor `errors`.
    #[error("{operation} returned no data")]
    MissingData {
        /// Operation that was in flight.
        operation: String,
    },

    /// GitHub refused the call because the rate limit is exhausted.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be read back from GitHub.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },
}

/// Errors surfaced while configuring or running an activity report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The authentication token was missing or blank.
    #[error("personal access token is required")]
    MissingToken,

    /// No organisation was configured.
    #[error("organization is required (use --organization or -o)")]
    MissingOrganization,

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The GitHub client could not be constructed.
    #[error("failed to build GitHub client: {message}")]
    Client {
        /// Builder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Listing the organisation's repositories failed; nothing was fetched.
    #[error("an error occurred during repositories listing: {source}")]
    Listing {
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// Fetching one repository's activity failed; the run was abandoned.
    #[error("an error occurred during report for {repository}: {source}")]
    RepositoryFetch {
        /// Repository whose fetch failed.
        repository: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },
}

impl ReportError {
    /// Returns the transport failure behind a run-phase error, if any.
    #[must_use]
    pub const fn transport(&self) -> Option<&TransportError> {
        match self {
            Self::Listing { source } | Self::RepositoryFetch { source, .. } => Some(source),
            _ => None,
        }
    }
}
