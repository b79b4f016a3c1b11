//! GraphQL documents issued by the activity gateway.
//!
//! Variable names (`organization`, `repo`, `date`, `date2`, `size`, `cursor`)
//! are part of the contract with the response decoders in the sibling
//! modules.

/// The last `$size` owner-affiliated repositories, single page.
pub(super) const RECENT_REPOSITORIES: &str = r"
query ($organization: String!, $size: Int!) {
  organization(login: $organization) {
    repositories(last: $size, affiliations: OWNER) {
      nodes {
        name
        owner {
          login
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
      totalCount
    }
  }
  rateLimit {
    limit
    cost
    remaining
    resetAt
  }
}
";

/// Owner-affiliated repositories walking forward from `$cursor`.
pub(super) const REPOSITORIES_AFTER: &str = r"
query ($organization: String!, $size: Int!, $cursor: String) {
  organization(login: $organization) {
    repositories(first: $size, after: $cursor, affiliations: OWNER) {
      nodes {
        name
        owner {
          login
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
      totalCount
    }
  }
  rateLimit {
    limit
    cost
    remaining
    resetAt
  }
}
";

/// Merged PRs, open PRs with timeline counts, and branch history since
/// `$date`/`$date2`, for one repository.
pub(super) const REPOSITORY_ACTIVITY: &str = r#"
query ($organization: String!, $repo: String!, $date: GitTimestamp!, $date2: DateTime!, $size: Int!) {
  repository(owner: $organization, name: $repo) {
    name
    mergedPR: pullRequests(last: $size, states: [MERGED], orderBy: {field: UPDATED_AT, direction: ASC}) {
      nodes {
        number
        title
        createdAt
        mergedAt
        state
        participants(last: $size) {
          nodes {
            login
          }
          totalCount
        }
      }
      totalCount
    }
    openPR: pullRequests(last: $size, states: [OPEN]) {
      nodes {
        number
        title
        createdAt
        mergedAt
        state
        participants(last: $size) {
          nodes {
            login
          }
          totalCount
        }
        timeline: timelineItems(since: $date2) {
          totalCount
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
      totalCount
    }
    refs(refPrefix: "refs/heads/", first: $size) {
      nodes {
        name
        target {
          ... on Commit {
            history(first: $size, since: $date) {
              nodes {
                oid
                committedDate
                author {
                  name
                }
                message
              }
              totalCount
            }
          }
        }
      }
      totalCount
    }
  }
  rateLimit {
    limit
    cost
    remaining
    resetAt
  }
}
"#;
