//! Organisation repository listing over GraphQL.

use std::time::Duration;

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

use super::RepositoryPageRequest;
use super::graphql::execute;
use super::queries::{RECENT_REPOSITORIES, REPOSITORIES_AFTER};
use crate::github::error::TransportError;
use crate::github::locator::{OrganizationName, RepositoryName};
use crate::github::pagination::{ApiPageInfo, Page, PageInfo};
use crate::github::rate_limit::ApiRateLimit;

const OPERATION: &str = "list repositories";

#[derive(Debug, Serialize)]
struct RepositoriesVariables<'a> {
    organization: &'a str,
    size: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoriesData {
    organization: Option<ApiOrganization>,
    rate_limit: Option<ApiRateLimit>,
}

#[derive(Debug, Deserialize)]
struct ApiOrganization {
    repositories: ApiRepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiRepositoryConnection {
    #[serde(default)]
    nodes: Vec<Option<ApiRepository>>,
    #[serde(default)]
    page_info: ApiPageInfo,
}

#[derive(Debug, Deserialize)]
struct ApiRepository {
    name: String,
}

pub(super) async fn fetch_repositories_page(
    client: &Octocrab,
    timeout: Duration,
    organization: &OrganizationName,
    request: &RepositoryPageRequest,
) -> Result<Page<RepositoryName>, TransportError> {
    let (query, variables) = match request {
        RepositoryPageRequest::MostRecent { size } => (
            RECENT_REPOSITORIES,
            RepositoriesVariables {
                organization: organization.as_str(),
                size: *size,
                cursor: None,
            },
        ),
        RepositoryPageRequest::Forward { size, cursor } => (
            REPOSITORIES_AFTER,
            RepositoriesVariables {
                organization: organization.as_str(),
                size: *size,
                cursor: cursor.as_deref(),
            },
        ),
    };

    let data: RepositoriesData = execute(client, timeout, OPERATION, query, variables).await?;
    let connection = data
        .organization
        .ok_or_else(|| TransportError::MissingData {
            operation: format!("{OPERATION} for {organization}"),
        })?
        .repositories;

    let page_info = match request {
        // A most-recent request never continues.
        RepositoryPageRequest::MostRecent { .. } => PageInfo::last(),
        RepositoryPageRequest::Forward { .. } => connection.page_info.into(),
    };

    Ok(Page {
        items: connection
            .nodes
            .into_iter()
            .flatten()
            .map(|node| RepositoryName::new(node.name))
            .collect(),
        page_info,
        rate_limit: data.rate_limit.map(Into::into),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::fetch_repositories_page;
    use crate::github::error::TransportError;
    use crate::github::gateway::RepositoryPageRequest;
    use crate::github::gateway::client::build_octocrab_client;
    use crate::github::locator::{OrganizationName, PersonalAccessToken, RepositoryName};

    fn organization() -> OrganizationName {
        OrganizationName::new("acme").expect("organisation should be valid")
    }

    fn client(server: &MockServer) -> octocrab::Octocrab {
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        build_octocrab_client(&token, &server.uri()).expect("client should build")
    }

    fn repositories_body(names: &[&str], has_next: bool, cursor: Option<&str>) -> serde_json::Value {
        let nodes: Vec<_> = names
            .iter()
            .map(|name| json!({ "name": name, "owner": { "login": "acme" } }))
            .collect();
        json!({
            "data": {
                "organization": {
                    "repositories": {
                        "nodes": nodes,
                        "pageInfo": { "hasNextPage": has_next, "endCursor": cursor },
                        "totalCount": names.len()
                    }
                },
                "rateLimit": {
                    "limit": 5000,
                    "cost": 1,
                    "remaining": 4321,
                    "resetAt": "2024-05-01T13:00:00Z"
                }
            }
        })
    }

    #[rstest]
    #[tokio::test]
    async fn most_recent_request_is_a_terminal_page() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(
                json!({ "variables": { "organization": "acme", "size": 10 } }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(repositories_body(
                &["a", "b"],
                true,
                Some("Y3Vyc29yOjEw"),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let page = fetch_repositories_page(
            &client(&server),
            Duration::from_secs(5),
            &organization(),
            &RepositoryPageRequest::MostRecent { size: 10 },
        )
        .await
        .expect("listing should succeed");

        assert_eq!(
            page.items,
            vec![RepositoryName::new("a"), RepositoryName::new("b")]
        );
        assert!(page.page_info.next_cursor().is_none());
        assert_eq!(page.rate_limit.map(|limit| limit.remaining()), Some(4321));
    }

    #[rstest]
    #[tokio::test]
    async fn forward_request_passes_cursor_and_keeps_page_info() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "variables": { "organization": "acme", "size": 50, "cursor": "Y3Vyc29yOjUw" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(repositories_body(
                &["c"],
                true,
                Some("Y3Vyc29yOjEwMA=="),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let page = fetch_repositories_page(
            &client(&server),
            Duration::from_secs(5),
            &organization(),
            &RepositoryPageRequest::Forward {
                size: 50,
                cursor: Some("Y3Vyc29yOjUw".to_owned()),
            },
        )
        .await
        .expect("listing should succeed");

        assert_eq!(page.items, vec![RepositoryName::new("c")]);
        assert_eq!(page.page_info.next_cursor(), Some("Y3Vyc29yOjEwMA=="));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_organisation_is_missing_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": { "organization": null, "rateLimit": null } })),
            )
            .mount(&server)
            .await;

        let result = fetch_repositories_page(
            &client(&server),
            Duration::from_secs(5),
            &organization(),
            &RepositoryPageRequest::Forward {
                size: 50,
                cursor: None,
            },
        )
        .await;

        assert_eq!(
            result,
            Err(TransportError::MissingData {
                operation: "list repositories for acme".to_owned()
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unauthorised_response_is_an_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/graphql"
            })))
            .mount(&server)
            .await;

        let result = fetch_repositories_page(
            &client(&server),
            Duration::from_secs(5),
            &organization(),
            &RepositoryPageRequest::MostRecent { size: 10 },
        )
        .await;

        assert!(
            matches!(result, Err(TransportError::Authentication { .. })),
            "expected Authentication, got {result:?}"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(repositories_body(&["a"], false, None))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let result = fetch_repositories_page(
            &client(&server),
            Duration::from_millis(100),
            &organization(),
            &RepositoryPageRequest::MostRecent { size: 10 },
        )
        .await;

        assert!(
            matches!(result, Err(TransportError::Timeout { .. })),
            "expected Timeout, got {result:?}"
        );
    }
}
