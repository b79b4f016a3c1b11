//! Octocrab client construction for the activity gateway.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::ReportError;
use crate::github::locator::PersonalAccessToken;

/// Builds an Octocrab client for the given token and API base URL.
///
/// Octocrab's retry layer is switched off: a failed round trip is reported
/// to the caller as-is.
///
/// # Errors
///
/// Returns `ReportError::InvalidUrl` when the base URI cannot be parsed or
/// `ReportError::Client` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, ReportError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ReportError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .add_retry_config(RetryConfig::None)
        .base_uri(base_uri)
        .map_err(|error| ReportError::Client {
            message: format!("invalid base URI: {error}"),
        })?
        .build()
        .map_err(|error| ReportError::Client {
            message: error.to_string(),
        })
}
