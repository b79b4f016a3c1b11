//! Wiremock helpers that stand in for GitHub's GraphQL endpoint.
//!
//! Listing and activity queries share `POST /graphql`; mocks tell them apart
//! by the query text and the `repo` variable.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRAPHQL_PATH: &str = "/graphql";

/// `rateLimit` object with the given remaining credits.
pub fn rate_limit(remaining: u32) -> Value {
    json!({
        "limit": 5000,
        "cost": 1,
        "remaining": remaining,
        "resetAt": "2030-01-01T00:00:00Z"
    })
}

/// Response body for one page of an organisation's repositories.
pub fn repositories_body(names: &[&str], next_cursor: Option<&str>, remaining: u32) -> Value {
    let nodes: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "owner": { "login": "acme" } }))
        .collect();
    json!({
        "data": {
            "organization": {
                "repositories": {
                    "nodes": nodes,
                    "pageInfo": {
                        "hasNextPage": next_cursor.is_some(),
                        "endCursor": next_cursor
                    },
                    "totalCount": names.len()
                }
            },
            "rateLimit": rate_limit(remaining)
        }
    })
}

/// Merged pull request node.
pub fn merged_node(number: u64, title: &str, merged_at: DateTime<Utc>) -> Value {
    json!({
        "number": number,
        "title": title,
        "createdAt": "2020-01-01T00:00:00Z",
        "mergedAt": merged_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        "state": "MERGED",
        "participants": { "nodes": [{ "login": "octocat" }], "totalCount": 1 }
    })
}

/// Open pull request node with `events` timeline items since the window
/// start.
pub fn open_node(number: u64, title: &str, events: u32, participants: u32) -> Value {
    json!({
        "number": number,
        "title": title,
        "createdAt": "2024-01-01T00:00:00Z",
        "mergedAt": null,
        "state": "OPEN",
        "participants": { "nodes": [], "totalCount": participants },
        "timeline": { "totalCount": events }
    })
}

/// Response body for one repository's activity query.
pub fn activity_body(name: &str, merged: Vec<Value>, open: Vec<Value>, remaining: u32) -> Value {
    json!({
        "data": {
            "repository": {
                "name": name,
                "mergedPR": { "nodes": merged },
                "openPR": { "nodes": open },
                "refs": { "nodes": [] }
            },
            "rateLimit": rate_limit(remaining)
        }
    })
}

/// Serves the ten-most-recent listing.
pub async fn mount_recent_listing(server: &MockServer, names: &[&str]) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("repositories(last: $size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repositories_body(names, None, 4999)))
        .mount(server)
        .await;
}

/// Serves one page of the exhaustive listing. Pages with a cursor must be
/// mounted before the first page.
pub async fn mount_listing_page(
    server: &MockServer,
    after: Option<&str>,
    names: &[&str],
    next_cursor: Option<&str>,
) {
    let mock = Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("repositories(first: $size"));
    let mock = match after {
        Some(cursor) => mock.and(body_partial_json(json!({ "variables": { "cursor": cursor } }))),
        None => mock,
    };
    mock.respond_with(
        ResponseTemplate::new(200).set_body_json(repositories_body(names, next_cursor, 4999)),
    )
    .expect(1)
    .mount(server)
    .await;
}

/// Rejects every request with `status`.
pub async fn mount_rejection(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/graphql"
        })))
        .mount(server)
        .await;
}

/// Serves `body` for the activity query of `repository`.
pub async fn mount_activity(server: &MockServer, repository: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "repo": repository } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the activity query of `repository` with a GraphQL error payload.
pub async fn mount_activity_failure(server: &MockServer, repository: &str) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "repo": repository } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "repository": null },
            "errors": [{
                "type": "NOT_FOUND",
                "message": format!("Could not resolve to a Repository with the name '{repository}'.")
            }]
        })))
        .mount(server)
        .await;
}
