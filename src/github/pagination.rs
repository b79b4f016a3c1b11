//! Cursor pagination for GitHub GraphQL connections.
//!
//! GraphQL connections report a `pageInfo { hasNextPage endCursor }` object.
//! [`collect_pages`] walks such a connection forward, passing each page's end
//! cursor unmodified to the request for the next page, and concatenates the
//! items in page order.

use std::future::Future;

use serde::Deserialize;

use super::error::TransportError;
use super::rate_limit::RateLimitInfo;
use crate::telemetry::{ReportLog, report_rate_limit};

/// Position information for one page of a connection.
///
/// # Example
///
/// ```
/// use ghreport::github::pagination::PageInfo;
///
/// let info = PageInfo::new(true, Some("Y3Vyc29yOjUw".to_owned()));
/// assert_eq!(info.next_cursor(), Some("Y3Vyc29yOjUw"));
/// assert!(PageInfo::last().next_cursor().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Whether more pages exist after this one.
    has_next_page: bool,
    /// Opaque cursor identifying the end of this page.
    end_cursor: Option<String>,
}

impl PageInfo {
    /// Creates a new page info instance.
    #[must_use]
    pub const fn new(has_next_page: bool, end_cursor: Option<String>) -> Self {
        Self {
            has_next_page,
            end_cursor,
        }
    }

    /// Page info for the final page of a connection.
    #[must_use]
    pub const fn last() -> Self {
        Self::new(false, None)
    }

    /// Returns true if more pages exist after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Returns the opaque end cursor, if GitHub sent one.
    #[must_use]
    pub fn end_cursor(&self) -> Option<&str> {
        self.end_cursor.as_deref()
    }

    /// Cursor to request the following page with, or `None` when this page
    /// terminates the walk.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_next_page {
            self.end_cursor()
        } else {
            None
        }
    }
}

/// `pageInfo` object as returned by the GraphQL API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPageInfo {
    #[serde(default)]
    pub(crate) has_next_page: bool,
    pub(crate) end_cursor: Option<String>,
}

impl From<ApiPageInfo> for PageInfo {
    fn from(value: ApiPageInfo) -> Self {
        Self::new(value.has_next_page, value.end_cursor)
    }
}

/// One page of items fetched from a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in response order.
    pub items: Vec<T>,
    /// Pagination state.
    pub page_info: PageInfo,
    /// Rate limit reported alongside the page.
    pub rate_limit: Option<RateLimitInfo>,
}

/// Fetches every page of a connection and concatenates the items.
///
/// `fetch_page` receives `None` for the first page and, for each following
/// page, the end cursor of the previous one. The walk stops when a page
/// reports no next page. The rate limit of every fetched page is reported
/// through `sink`.
///
/// # Errors
///
/// Returns the first [`TransportError`] raised by `fetch_page`; items from
/// earlier pages are discarded. Returns [`TransportError::Api`] when a page
/// claims a next page without advancing the cursor.
pub async fn collect_pages<T, F, Fut>(
    sink: &dyn ReportLog,
    mut fetch_page: F,
) -> Result<Vec<T>, TransportError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, TransportError>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages: usize = 0;

    loop {
        let page = fetch_page(cursor.clone()).await?;
        pages += 1;
        report_rate_limit(sink, page.rate_limit.as_ref());
        items.extend(page.items);

        let Some(next) = page.page_info.next_cursor() else {
            if page.page_info.has_next_page() {
                tracing::warn!(pages, "page reported a next page without an end cursor");
            }
            break;
        };

        if cursor.as_deref() == Some(next) {
            return Err(TransportError::Api {
                message: format!("pagination cursor did not advance after page {pages}"),
            });
        }
        cursor = Some(next.to_owned());
    }

    tracing::debug!(pages, items = items.len(), "pagination complete");
    Ok(items)
}
