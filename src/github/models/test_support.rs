//! Test helpers for constructing `PullRequest` fixtures.
//!
//! Builders start from `PullRequest::default()` and set only the fields a
//! test cares about; the repository is left empty so tests can exercise the
//! classifier's assignment.

use chrono::{DateTime, Utc};

use super::{PullRequest, PullRequestState};

/// Constructs an open `PullRequest` with the given activity count.
#[must_use]
pub fn open_pr(number: u64, title: &str, activity_count: u32) -> PullRequest {
    PullRequest {
        number,
        title: title.to_owned(),
        state: PullRequestState::Open,
        activity_count,
        ..Default::default()
    }
}

/// Constructs a merged `PullRequest` merged at `merged_at`.
#[must_use]
pub fn merged_pr(number: u64, title: &str, merged_at: Option<DateTime<Utc>>) -> PullRequest {
    PullRequest {
        number,
        title: title.to_owned(),
        state: PullRequestState::Merged,
        merged_at,
        ..Default::default()
    }
}

/// Returns `pr` created at `created_at`.
#[must_use]
pub fn created_at(pr: PullRequest, created_at: Option<DateTime<Utc>>) -> PullRequest {
    PullRequest { created_at, ..pr }
}

