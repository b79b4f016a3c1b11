//! Presentation orderings over pull request sequences.
//!
//! Both functions return a sorted copy; the buckets they are applied to are
//! never reordered.

use crate::github::models::PullRequest;

/// Most active first. Pull requests with equal activity keep their input
/// order.
#[must_use]
pub fn by_activity(prs: &[PullRequest]) -> Vec<PullRequest> {
    let mut sorted = prs.to_vec();
    sorted.sort_by(|left, right| right.activity_count.cmp(&left.activity_count));
    sorted
}

/// Oldest first. A pull request whose creation time did not parse sorts
/// before every dated one.
#[must_use]
pub fn by_age(prs: &[PullRequest]) -> Vec<PullRequest> {
    let mut sorted = prs.to_vec();
    sorted.sort_by_key(|pr| pr.created_at);
    sorted
}
