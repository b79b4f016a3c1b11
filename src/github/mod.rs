//! GitHub organisation activity retrieval.
//!
//! This module wraps Octocrab's GraphQL support to list an organisation's
//! repositories and load per-repository pull request activity. Responses are
//! flattened into plain domain values and transport failures are mapped into
//! [`TransportError`] variants so that the report engine never sees Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;
pub mod timestamp;

pub use error::{ReportError, TransportError};
pub use gateway::{ActivityGateway, OctocrabActivityGateway, RepositoryPageRequest};
pub use locator::{OrganizationName, PersonalAccessToken, RepositoryName};
pub use models::{CommitSummary, PullRequest, PullRequestState, RepositoryActivity};
pub use pagination::{Page, PageInfo};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockActivityGateway;
