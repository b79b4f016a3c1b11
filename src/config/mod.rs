//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.ghreport.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GHREPORT_ORGANIZATION`, `GHREPORT_TOKEN`,
//!    or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--organization`/`-o` and `--token`/`-t`
//!
//! # Configuration File
//!
//! ```toml
//! organization = "acme"
//! token = "ghp_example"
//! duration_days = 7
//! exhaustive = false
//! request_timeout_seconds = 30
//! highlights = 5
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ReportError;
use crate::github::locator::{DEFAULT_API_BASE, OrganizationName, PersonalAccessToken};
use crate::report::{DEFAULT_DURATION_DAYS, ListingPolicy};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_HIGHLIGHTS: usize = 5;

/// Report configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `GHREPORT_ORGANIZATION` or `--organization`: Organisation login
/// - `GHREPORT_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `GHREPORT_DURATION_DAYS` or `--duration-days`: Lookback window in days
/// - `GHREPORT_API_BASE` or `--api-base`: GitHub API base URL
///
/// # Example
///
/// ```no_run
/// use ghreport::ReportConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ReportConfig::load().expect("failed to load configuration");
/// let organization = config.require_organization().expect("organization required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GHREPORT",
    discovery(
        dotfile_name = ".ghreport.toml",
        config_file_name = "ghreport.toml",
        app_name = "ghreport"
    )
)]
pub struct ReportConfig {
    /// GitHub organisation whose repositories are reported on.
    ///
    /// Can be provided via:
    /// - CLI: `--organization <LOGIN>` or `-o <LOGIN>`
    /// - Environment: `GHREPORT_ORGANIZATION`
    /// - Config file: `organization = "..."`
    #[ortho_config(cli_short = 'o')]
    pub organization: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GHREPORT_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Lookback window in days. Defaults to one week.
    #[ortho_config(cli_short = 'd')]
    pub duration_days: u32,

    /// GitHub API base URL. GraphQL queries are posted to `<base>/graphql`.
    #[ortho_config()]
    pub api_base: String,

    /// Walks every owner-affiliated repository instead of the ten most
    /// recent ones.
    ///
    /// Can be provided via:
    /// - CLI: `--exhaustive` / `-e`
    /// - Config file: `exhaustive = true`
    #[ortho_config(cli_short = 'e')]
    pub exhaustive: bool,

    /// Timeout applied to every GraphQL round trip, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Number of pull requests the digest highlights per open bucket.
    #[ortho_config()]
    pub highlights: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            organization: None,
            token: None,
            duration_days: DEFAULT_DURATION_DAYS,
            api_base: DEFAULT_API_BASE.to_owned(),
            exhaustive: false,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            highlights: DEFAULT_HIGHLIGHTS,
        }
    }
}

impl ReportConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingToken`] when no token source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, ReportError> {
        let value = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ReportError::MissingToken)?;
        PersonalAccessToken::new(value)
    }

    /// Returns the organisation or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingOrganization`] when no organisation is
    /// configured or it is blank.
    pub fn require_organization(&self) -> Result<OrganizationName, ReportError> {
        self.organization
            .as_deref()
            .ok_or(ReportError::MissingOrganization)
            .and_then(OrganizationName::new)
    }

    /// Repository listing policy selected by `exhaustive`.
    #[must_use]
    pub const fn listing_policy(&self) -> ListingPolicy {
        if self.exhaustive {
            ListingPolicy::Exhaustive
        } else {
            ListingPolicy::BoundedRecent
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests;
