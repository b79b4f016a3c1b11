//! GraphQL request/response envelope and execution with a per-request
//! timeout.

use std::time::Duration;

use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::github::error::TransportError;

use super::error_mapping::map_octocrab_error;

/// Error type GitHub attaches to rate limited GraphQL queries.
const RATE_LIMITED: &str = "RATE_LIMITED";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'query, V> {
    query: &'query str,
    variables: V,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl<T> GraphQlResponse<T> {
    /// Extracts `data`, treating any `errors` entry as a failed round trip.
    pub(super) fn into_data(self, operation: &str) -> Result<T, TransportError> {
        if !self.errors.is_empty() {
            let rate_limited = self
                .errors
                .iter()
                .any(|error| error.kind.as_deref() == Some(RATE_LIMITED));
            let messages: Vec<String> = self.errors.into_iter().map(|error| error.message).collect();

            return Err(if rate_limited {
                TransportError::RateLimitExceeded {
                    rate_limit: None,
                    message: format!("{operation} failed: {}", messages.join("; ")),
                }
            } else {
                TransportError::GraphQl {
                    operation: operation.to_owned(),
                    messages,
                }
            });
        }

        self.data.ok_or_else(|| TransportError::MissingData {
            operation: operation.to_owned(),
        })
    }
}

/// Posts `query` with `variables` and decodes the `data` object as `T`.
///
/// # Errors
///
/// Returns [`TransportError::Timeout`] when the round trip exceeds
/// `timeout`, the mapped Octocrab error when the HTTP exchange fails, and
/// the GraphQL-level errors described on [`GraphQlResponse::into_data`].
pub(super) async fn execute<T, V>(
    client: &Octocrab,
    timeout: Duration,
    operation: &str,
    query: &str,
    variables: V,
) -> Result<T, TransportError>
where
    T: DeserializeOwned + Send,
    V: Serialize + Send + Sync,
{
    let payload = GraphQlRequest { query, variables };
    tracing::debug!(operation, "posting GraphQL query");

    let response: GraphQlResponse<T> =
        match tokio::time::timeout(timeout, client.graphql(&payload)).await {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => return Err(map_octocrab_error(operation, &error)),
            Err(_elapsed) => {
                return Err(TransportError::Timeout {
                    operation: operation.to_owned(),
                    seconds: timeout.as_secs(),
                });
            }
        };

    response.into_data(operation)
}
