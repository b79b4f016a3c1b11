//! Report engine: lists an organisation's repositories, fetches each one's
//! pull request activity, and classifies it into three buckets.
//!
//! A [`Report`] processes repositories strictly one after another. The first
//! transport failure aborts the whole run; there is no partial report.

pub mod classify;
pub mod listing;
pub mod sort;

use chrono::{DateTime, TimeDelta, Utc};

use crate::github::error::ReportError;
use crate::github::gateway::ActivityGateway;
use crate::github::locator::OrganizationName;
use crate::github::models::PullRequest;
use crate::telemetry::{NoopLog, ReportLog, report_rate_limit};

pub use classify::classify;
pub use listing::{ListingPolicy, list_repositories};
pub use sort::{by_activity, by_age};

/// Lookback window applied when none is given.
pub const DEFAULT_DURATION_DAYS: u32 = 7;

/// Classified pull requests, in repository listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportResult {
    /// Pull requests merged inside the window.
    pub merged_prs: Vec<PullRequest>,
    /// Open pull requests with at least one timeline event in the window.
    pub open_prs_with_activity: Vec<PullRequest>,
    /// Open pull requests with no timeline event in the window.
    pub open_prs_without_activity: Vec<PullRequest>,
}

impl ReportResult {
    /// Empties all three buckets.
    pub fn clear(&mut self) {
        self.merged_prs.clear();
        self.open_prs_with_activity.clear();
        self.open_prs_without_activity.clear();
    }

    /// Returns true when no bucket holds a pull request.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.merged_prs.is_empty()
            && self.open_prs_with_activity.is_empty()
            && self.open_prs_without_activity.is_empty()
    }

    fn summary_lines(&self) -> [String; 3] {
        [
            format!("Nb merged pr:{}", self.merged_prs.len()),
            format!(
                "Nb open pr with activity:{}",
                self.open_prs_with_activity.len()
            ),
            format!(
                "Nb open pr without activity:{}",
                self.open_prs_without_activity.len()
            ),
        ]
    }
}

/// Where a report run currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    /// Not started.
    #[default]
    Idle,
    /// Enumerating repositories.
    Listing,
    /// Fetching one repository's activity.
    Fetching,
    /// Classifying one repository's activity.
    Classifying,
    /// Finished; the result is complete.
    Done,
    /// Aborted by an error; the result must not be relied upon.
    Failed,
}

/// Activity report for one organisation over a lookback window.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use ghreport::github::{OctocrabActivityGateway, OrganizationName, PersonalAccessToken};
/// use ghreport::report::Report;
///
/// # async fn example() -> Result<(), ghreport::ReportError> {
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let gateway = OctocrabActivityGateway::for_token(
///     &token,
///     "https://api.github.com",
///     Duration::from_secs(30),
/// )?;
/// let mut report = Report::new(&gateway, OrganizationName::new("acme")?, 7);
/// report.run().await?;
/// println!("{} merged", report.result().merged_prs.len());
/// # Ok(())
/// # }
/// ```
pub struct Report<'client, Gateway>
where
    Gateway: ActivityGateway + ?Sized,
{
    client: &'client Gateway,
    organization: OrganizationName,
    duration_days: u32,
    policy: ListingPolicy,
    sink: Box<dyn ReportLog>,
    report_date: Option<DateTime<Utc>>,
    since: Option<DateTime<Utc>>,
    result: ReportResult,
    state: RunState,
}

impl<'client, Gateway> Report<'client, Gateway>
where
    Gateway: ActivityGateway + ?Sized,
{
    /// Creates an idle report using the bounded-recent listing policy and a
    /// sink that discards telemetry.
    #[must_use]
    pub fn new(
        client: &'client Gateway,
        organization: OrganizationName,
        duration_days: u32,
    ) -> Self {
        Self {
            client,
            organization,
            duration_days,
            policy: ListingPolicy::default(),
            sink: Box::new(NoopLog),
            report_date: None,
            since: None,
            result: ReportResult::default(),
            state: RunState::Idle,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_log(mut self, sink: impl ReportLog + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the repository listing policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ListingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Organisation the report covers.
    #[must_use]
    pub const fn organization(&self) -> &OrganizationName {
        &self.organization
    }

    /// Lookback window in days.
    #[must_use]
    pub const fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Listing policy used by [`Report::run`].
    #[must_use]
    pub const fn policy(&self) -> ListingPolicy {
        self.policy
    }

    /// When the last run started, if any.
    #[must_use]
    pub const fn report_date(&self) -> Option<DateTime<Utc>> {
        self.report_date
    }

    /// Window start of the last run, if any.
    #[must_use]
    pub const fn since(&self) -> Option<DateTime<Utc>> {
        self.since
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Classified pull requests. Only complete when [`Report::state`] is
    /// [`RunState::Done`].
    #[must_use]
    pub const fn result(&self) -> &ReportResult {
        &self.result
    }

    /// Consumes the report, returning its result.
    #[must_use]
    pub fn into_result(self) -> ReportResult {
        self.result
    }

    /// Runs the report with the window ending now.
    ///
    /// # Errors
    ///
    /// See [`Report::run_at`].
    pub async fn run(&mut self) -> Result<(), ReportError> {
        self.run_at(Utc::now()).await
    }

    /// Runs the report with the window ending at `now`.
    ///
    /// The buckets are emptied first, so a report can be run again.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Listing`] when the repositories cannot be
    /// listed, and [`ReportError::RepositoryFetch`] naming the first
    /// repository whose activity could not be fetched. Later repositories
    /// are not attempted. Returns [`ReportError::Configuration`] when the
    /// window start falls outside the representable date range.
    pub async fn run_at(&mut self, now: DateTime<Utc>) -> Result<(), ReportError> {
        self.result.clear();
        self.report_date = Some(now);
        let window = now
            .checked_sub_signed(TimeDelta::days(i64::from(self.duration_days)))
            .ok_or_else(|| ReportError::Configuration {
                message: format!("a {} day window is out of range", self.duration_days),
            });
        self.since = window.as_ref().ok().copied();

        let outcome = match window {
            Ok(since) => self.collect(since).await,
            Err(error) => Err(error),
        };

        match outcome {
            Ok(()) => {
                self.state = RunState::Done;
                for line in self.result.summary_lines() {
                    self.sink.log(&line);
                }
                tracing::info!(
                    organization = %self.organization,
                    merged = self.result.merged_prs.len(),
                    active = self.result.open_prs_with_activity.len(),
                    inactive = self.result.open_prs_without_activity.len(),
                    "report complete"
                );
                Ok(())
            }
            Err(error) => {
                self.state = RunState::Failed;
                tracing::warn!(organization = %self.organization, %error, "report failed");
                self.sink.log(&error.to_string());
                Err(error)
            }
        }
    }

    async fn collect(&mut self, since: DateTime<Utc>) -> Result<(), ReportError> {
        let client = self.client;

        self.state = RunState::Listing;
        let repositories =
            list_repositories(client, &self.organization, self.policy, self.sink.as_ref())
                .await
                .map_err(|source| ReportError::Listing { source })?;
        tracing::debug!(count = repositories.len(), "repositories listed");

        for repository in &repositories {
            self.state = RunState::Fetching;
            let activity = client
                .repository_activity(&self.organization, repository, since)
                .await
                .map_err(|source| ReportError::RepositoryFetch {
                    repository: repository.as_str().to_owned(),
                    source,
                })?;
            report_rate_limit(self.sink.as_ref(), activity.rate_limit.as_ref());
            tracing::debug!(
                repository = %repository,
                commits = activity.commits.len(),
                "branch commits since window start"
            );

            self.state = RunState::Classifying;
            classify(repository, activity, since, &mut self.result);
        }

        Ok(())
    }
}
