//! Sorting fetched pull requests into the three report buckets.

use chrono::{DateTime, Utc};

use super::ReportResult;
use crate::github::locator::RepositoryName;
use crate::github::models::{PullRequest, RepositoryActivity};

/// Returns true when `pr` was merged strictly after `since`.
///
/// A missing or unparseable merge timestamp never qualifies.
#[must_use]
pub fn merged_within(pr: &PullRequest, since: DateTime<Utc>) -> bool {
    pr.merged_at.is_some_and(|merged_at| merged_at > since)
}

/// Appends one repository's pull requests to the buckets of `result`.
///
/// Each appended pull request carries the owning repository's name. Merged
/// pull requests outside the window are dropped; open pull requests are
/// split on whether their activity count is zero. Input order is kept
/// within each bucket.
pub fn classify(
    repository: &RepositoryName,
    activity: RepositoryActivity,
    since: DateTime<Utc>,
    result: &mut ReportResult,
) {
    let assign = |pr: PullRequest| PullRequest {
        repository: repository.as_str().to_owned(),
        ..pr
    };

    result.merged_prs.extend(
        activity
            .merged
            .into_iter()
            .filter(|pr| merged_within(pr, since))
            .map(assign),
    );

    for pr in activity.open.into_iter().map(assign) {
        if pr.activity_count > 0 {
            result.open_prs_with_activity.push(pr);
        } else {
            result.open_prs_without_activity.push(pr);
        }
    }
}
