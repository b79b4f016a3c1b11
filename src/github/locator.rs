//! Identity wrappers and API endpoint resolution for report runs.

use std::fmt;

use url::Url;

use super::error::ReportError;

/// Default GitHub API base; GraphQL queries are posted to `<base>/graphql`.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Organisation login wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationName(String);

impl OrganizationName {
    /// Validates that the organisation login is non-blank and trims it.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingOrganization` when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ReportError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReportError::MissingOrganization);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the organisation login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for OrganizationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository name as returned by the repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Wraps a repository name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ReportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReportError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Resolves the API base for a configured URL.
///
/// `github.com` web URLs map to the public API host; any other URL is taken
/// as an explicit API base (for example a GitHub Enterprise `/api` root or a
/// local test server).
///
/// # Errors
///
/// Returns `ReportError::InvalidUrl` when the URL does not parse, has no
/// host, or uses a scheme other than `http`/`https`.
///
/// # Example
///
/// ```
/// use ghreport::github::locator::resolve_api_base;
///
/// let base = resolve_api_base("https://github.com").expect("should resolve");
/// assert_eq!(base.as_str(), "https://api.github.com/");
/// ```
pub fn resolve_api_base(input: &str) -> Result<Url, ReportError> {
    let parsed = Url::parse(input.trim()).map_err(|error| ReportError::InvalidUrl(error.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ReportError::InvalidUrl(format!(
            "unsupported scheme `{}`",
            parsed.scheme()
        )));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| ReportError::InvalidUrl("URL must include a host".to_owned()))?;

    if host.eq_ignore_ascii_case("github.com") || host.eq_ignore_ascii_case("www.github.com") {
        return Url::parse(DEFAULT_API_BASE)
            .map_err(|error| ReportError::InvalidUrl(error.to_string()));
    }

    Ok(parsed)
}
