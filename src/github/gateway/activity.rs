//! Per-repository activity query and its flattening into domain values.

use std::time::Duration;

use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

use super::ACTIVITY_PAGE_SIZE;
use super::graphql::execute;
use super::queries::REPOSITORY_ACTIVITY;
use crate::github::error::TransportError;
use crate::github::locator::{OrganizationName, RepositoryName};
use crate::github::models::{ApiPullRequest, CommitSummary, PullRequestState, RepositoryActivity};
use crate::github::rate_limit::ApiRateLimit;
use crate::github::timestamp::{format_timestamp, parse_timestamp};

const OPERATION: &str = "repository activity";

#[derive(Debug, Serialize)]
struct ActivityVariables<'a> {
    organization: &'a str,
    repo: &'a str,
    date: String,
    date2: String,
    size: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityData {
    repository: Option<ApiRepositoryActivity>,
    rate_limit: Option<ApiRateLimit>,
}

#[derive(Debug, Deserialize)]
struct ApiRepositoryActivity {
    #[serde(rename = "mergedPR", default)]
    merged_pr: ApiPullRequestConnection,
    #[serde(rename = "openPR", default)]
    open_pr: ApiPullRequestConnection,
    #[serde(default)]
    refs: Option<ApiRefConnection>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiPullRequestConnection {
    #[serde(default)]
    nodes: Vec<Option<ApiPullRequest>>,
}

#[derive(Debug, Deserialize)]
struct ApiRefConnection {
    #[serde(default)]
    nodes: Vec<Option<ApiRef>>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    name: String,
    target: Option<ApiCommitTarget>,
}

/// Commit target; non-commit targets deserialise with no history.
#[derive(Debug, Deserialize)]
struct ApiCommitTarget {
    history: Option<ApiHistory>,
}

#[derive(Debug, Deserialize)]
struct ApiHistory {
    #[serde(default)]
    nodes: Vec<Option<ApiCommit>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCommit {
    oid: String,
    committed_date: Option<String>,
    author: Option<ApiCommitAuthor>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiCommitAuthor {
    name: Option<String>,
}

impl ApiRef {
    fn into_commits(self) -> impl Iterator<Item = CommitSummary> {
        let branch = self.name;
        self.target
            .and_then(|target| target.history)
            .map(|history| history.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(move |commit| CommitSummary {
                branch: branch.clone(),
                oid: commit.oid,
                committed_at: commit.committed_date.as_deref().and_then(parse_timestamp),
                author: commit.author.and_then(|author| author.name),
                message: commit.message,
            })
    }
}

pub(super) async fn fetch_repository_activity(
    client: &Octocrab,
    timeout: Duration,
    organization: &OrganizationName,
    repository: &RepositoryName,
    since: DateTime<Utc>,
) -> Result<RepositoryActivity, TransportError> {
    let window_start = format_timestamp(since);
    let variables = ActivityVariables {
        organization: organization.as_str(),
        repo: repository.as_str(),
        date: window_start.clone(),
        date2: window_start,
        size: ACTIVITY_PAGE_SIZE,
    };

    let data: ActivityData =
        execute(client, timeout, OPERATION, REPOSITORY_ACTIVITY, variables).await?;
    let node = data
        .repository
        .ok_or_else(|| TransportError::MissingData {
            operation: format!("{OPERATION} for {organization}/{repository}"),
        })?;

    let activity = RepositoryActivity {
        merged: node
            .merged_pr
            .nodes
            .into_iter()
            .flatten()
            .map(|pr| pr.into_pull_request(PullRequestState::Merged))
            .collect(),
        open: node
            .open_pr
            .nodes
            .into_iter()
            .flatten()
            .map(|pr| pr.into_pull_request(PullRequestState::Open))
            .collect(),
        commits: node
            .refs
            .map(|refs| refs.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .flat_map(ApiRef::into_commits)
            .collect(),
        rate_limit: data.rate_limit.map(Into::into),
    };

    tracing::debug!(
        repository = %repository,
        merged = activity.merged.len(),
        open = activity.open.len(),
        commits = activity.commits.len(),
        "fetched repository activity"
    );
    Ok(activity)
}
