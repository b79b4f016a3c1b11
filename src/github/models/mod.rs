//! Data models representing pull requests and repository activity.
//!
//! Domain types are flat value objects decoupled from the nesting of the
//! GraphQL responses. Types prefixed with `Api` are internal deserialisation
//! targets that convert into the public domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::rate_limit::RateLimitInfo;
use super::timestamp::parse_timestamp;

#[cfg(test)]
pub mod test_support;

/// Lifecycle state of a pull request as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestState {
    /// Open and awaiting merge.
    #[default]
    Open,
    /// Merged into its base branch.
    Merged,
    /// Closed without merging.
    Closed,
    /// A state this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// Pull request as consumed by the report and its presentation layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request number, unique within its repository.
    pub number: u64,
    /// Title of the pull request.
    pub title: String,
    /// Owning repository name. Empty until the classifier assigns it.
    pub repository: String,
    /// Creation timestamp; `None` when GitHub's value did not parse.
    pub created_at: Option<DateTime<Utc>>,
    /// Merge timestamp; only ever set for merged pull requests.
    pub merged_at: Option<DateTime<Utc>>,
    /// Lifecycle state.
    pub state: PullRequestState,
    /// Total number of participants.
    pub participant_count: u32,
    /// Logins of the participants returned with the query.
    pub participant_logins: Vec<String>,
    /// Timeline events since the window start; 0 unless the PR is open.
    pub activity_count: u32,
}

/// A commit on one of the repository's branches since the window start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Branch the commit was found on.
    pub branch: String,
    /// Commit object id.
    pub oid: String,
    /// Commit timestamp; `None` when GitHub's value did not parse.
    pub committed_at: Option<DateTime<Utc>>,
    /// Author display name if present.
    pub author: Option<String>,
    /// Full commit message.
    pub message: String,
}

/// Everything fetched for one repository in a single round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryActivity {
    /// Most recently updated merged pull requests, over-fetched regardless of
    /// the window.
    pub merged: Vec<PullRequest>,
    /// Most recent open pull requests with activity counts.
    pub open: Vec<PullRequest>,
    /// Branch commits since the window start.
    pub commits: Vec<CommitSummary>,
    /// Rate limit reported alongside the response.
    pub rate_limit: Option<RateLimitInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiCount {
    #[serde(default)]
    pub(crate) total_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiParticipants {
    #[serde(default)]
    pub(crate) nodes: Vec<Option<ApiUser>>,
    #[serde(default)]
    pub(crate) total_count: u32,
}

/// Pull request node shared by the merged and open connections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    #[serde(default)]
    pub(crate) title: String,
    pub(crate) created_at: Option<String>,
    pub(crate) merged_at: Option<String>,
    pub(crate) state: Option<PullRequestState>,
    #[serde(default)]
    pub(crate) participants: ApiParticipants,
    pub(crate) timeline: Option<ApiCount>,
}

impl ApiPullRequest {
    /// Converts the node, using `fallback_state` when the query did not ask
    /// for the state.
    pub(crate) fn into_pull_request(self, fallback_state: PullRequestState) -> PullRequest {
        let state = self.state.unwrap_or(fallback_state);
        let merged_at = match state {
            PullRequestState::Merged => self.merged_at.as_deref().and_then(parse_timestamp),
            _ => None,
        };
        let activity_count = match state {
            PullRequestState::Open => self.timeline.map_or(0, |timeline| timeline.total_count),
            _ => 0,
        };

        PullRequest {
            number: self.number,
            title: self.title,
            repository: String::new(),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            merged_at,
            state,
            participant_count: self.participants.total_count,
            participant_logins: self
                .participants
                .nodes
                .into_iter()
                .flatten()
                .filter_map(|user| user.login)
                .collect(),
            activity_count,
        }
    }
}
