//! Repository enumeration policies.

use crate::github::error::TransportError;
use crate::github::gateway::{ActivityGateway, RepositoryPageRequest};
use crate::github::locator::{OrganizationName, RepositoryName};
use crate::github::pagination::collect_pages;
use crate::telemetry::{ReportLog, report_rate_limit};

/// How many of an organisation's repositories a run covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingPolicy {
    /// The ten most recent owner-affiliated repositories, in one request.
    ///
    /// Caps API cost at the expense of completeness.
    #[default]
    BoundedRecent,
    /// Every owner-affiliated repository, fifty per page.
    Exhaustive,
}

impl ListingPolicy {
    /// Number of repositories requested per page.
    #[must_use]
    pub const fn page_size(self) -> u8 {
        match self {
            Self::BoundedRecent => 10,
            Self::Exhaustive => 50,
        }
    }
}

/// Lists the organisation's owner-affiliated repositories under `policy`.
///
/// # Errors
///
/// Returns the first [`TransportError`] raised while listing; no partial
/// listing is returned.
pub async fn list_repositories<G>(
    gateway: &G,
    organization: &OrganizationName,
    policy: ListingPolicy,
    sink: &dyn ReportLog,
) -> Result<Vec<RepositoryName>, TransportError>
where
    G: ActivityGateway + ?Sized,
{
    let size = policy.page_size();
    tracing::debug!(%organization, ?policy, size, "listing repositories");

    match policy {
        ListingPolicy::BoundedRecent => {
            let page = gateway
                .repositories_page(organization, &RepositoryPageRequest::MostRecent { size })
                .await?;
            report_rate_limit(sink, page.rate_limit.as_ref());
            Ok(page.items)
        }
        ListingPolicy::Exhaustive => {
            collect_pages(sink, |cursor| {
                let request = RepositoryPageRequest::Forward { size, cursor };
                async move { gateway.repositories_page(organization, &request).await }
            })
            .await
        }
    }
}
