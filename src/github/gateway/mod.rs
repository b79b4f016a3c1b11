//! Gateway for loading organisation activity through Octocrab's GraphQL
//! support.
//!
//! The [`ActivityGateway`] trait is the seam between the report engine and
//! the network: the engine only ever sees flat domain values, and tests swap
//! in a mock implementation.

mod activity;
mod client;
mod error_mapping;
mod graphql;
mod queries;
mod repositories;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;

use crate::github::error::{ReportError, TransportError};
use crate::github::locator::{OrganizationName, PersonalAccessToken, RepositoryName};
use crate::github::models::RepositoryActivity;
use crate::github::pagination::Page;

use client::build_octocrab_client;

/// Page size of the merged and open pull request connections, the
/// participants connection, and the branch history.
pub const ACTIVITY_PAGE_SIZE: u8 = 50;

/// Request timeout applied when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Which slice of the organisation's repositories a listing request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryPageRequest {
    /// The last `size` repositories, in a single page with no follow-up.
    MostRecent {
        /// Number of repositories to request.
        size: u8,
    },
    /// `size` repositories after `cursor`, walking forward.
    Forward {
        /// Number of repositories per page.
        size: u8,
        /// End cursor of the previous page; `None` for the first page.
        cursor: Option<String>,
    },
}

/// Gateway that can load organisation repositories and their activity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityGateway: Send + Sync {
    /// Fetch one page of the organisation's owner-affiliated repositories.
    async fn repositories_page(
        &self,
        organization: &OrganizationName,
        request: &RepositoryPageRequest,
    ) -> Result<Page<RepositoryName>, TransportError>;

    /// Fetch merged pull requests, open pull requests with activity counts,
    /// and branch history for one repository in a single round trip.
    async fn repository_activity(
        &self,
        organization: &OrganizationName,
        repository: &RepositoryName,
        since: DateTime<Utc>,
    ) -> Result<RepositoryActivity, TransportError>;
}

/// Octocrab-backed activity gateway.
pub struct OctocrabActivityGateway {
    client: Octocrab,
    timeout: Duration,
}

impl OctocrabActivityGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Builds an Octocrab client for the given token and API base URL.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidUrl` when the base URI cannot be parsed or
    /// `ReportError::Client` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &str,
        timeout: Duration,
    ) -> Result<Self, ReportError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab, timeout))
    }
}

#[async_trait]
impl ActivityGateway for OctocrabActivityGateway {
    async fn repositories_page(
        &self,
        organization: &OrganizationName,
        request: &RepositoryPageRequest,
    ) -> Result<Page<RepositoryName>, TransportError> {
        repositories::fetch_repositories_page(&self.client, self.timeout, organization, request)
            .await
    }

    async fn repository_activity(
        &self,
        organization: &OrganizationName,
        repository: &RepositoryName,
        since: DateTime<Utc>,
    ) -> Result<RepositoryActivity, TransportError> {
        activity::fetch_repository_activity(
            &self.client,
            self.timeout,
            organization,
            repository,
            since,
        )
        .await
    }
}
