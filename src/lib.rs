//! `ghreport` library crate: GitHub organisation pull request activity
//! reports.
//!
//! The library lists an organisation's repositories over GitHub's GraphQL
//! API, fetches each repository's merged and open pull requests, and
//! classifies them into merged, active, and inactive buckets over a
//! lookback window. Telemetry goes to an injected [`telemetry::ReportLog`].

pub mod config;
pub mod github;
pub mod report;
pub mod telemetry;

pub use config::ReportConfig;
pub use github::{
    ActivityGateway, OctocrabActivityGateway, OrganizationName, PersonalAccessToken, PullRequest,
    PullRequestState, RateLimitInfo, ReportError, RepositoryActivity, RepositoryName,
    TransportError,
};
pub use report::{ListingPolicy, Report, ReportResult, RunState};
