//! Plain-text digest of a finished report.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use ghreport::github::timestamp::days_between;
use ghreport::report::{ReportResult, by_activity, by_age};
use ghreport::{PullRequest, ReportError};

/// Writes the three-section digest for `organization` to `writer`.
///
/// The active and inactive sections list at most `highlights` pull
/// requests, most active first and oldest first respectively. Ages are
/// whole days before `now`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when `writer` fails.
pub fn write_digest<W: Write>(
    writer: &mut W,
    organization: &str,
    result: &ReportResult,
    now: DateTime<Utc>,
    highlights: usize,
) -> Result<(), ReportError> {
    writeln!(writer, "{} Merged PRs!", result.merged_prs.len())
        .map_err(|error| io_error(&error))?;
    for pr in &result.merged_prs {
        let age = pr.merged_at.map(|merged_at| days_between(merged_at, now));
        write_entry(writer, organization, pr, &format!("merged {}", days_ago(age)))?;
    }
    writeln!(writer).map_err(|error| io_error(&error))?;

    let active = &result.open_prs_with_activity;
    writeln!(
        writer,
        "{}",
        section_title(
            active.len(),
            highlights,
            "open PRs with an activity",
            "most active ones"
        )
    )
    .map_err(|error| io_error(&error))?;
    for pr in by_activity(active).iter().take(highlights) {
        let detail = format!(
            "{} events, {} participants",
            pr.activity_count, pr.participant_count
        );
        write_entry(writer, organization, pr, &detail)?;
    }
    writeln!(writer).map_err(|error| io_error(&error))?;

    let inactive = &result.open_prs_without_activity;
    writeln!(
        writer,
        "{}",
        section_title(
            inactive.len(),
            highlights,
            "open PRs without any activity last week",
            "oldest"
        )
    )
    .map_err(|error| io_error(&error))?;
    for pr in by_age(inactive).iter().take(highlights) {
        let age = pr.created_at.map(|created_at| days_between(created_at, now));
        write_entry(writer, organization, pr, &format!("open {}", days_ago(age)))?;
    }

    Ok(())
}

fn section_title(count: usize, highlights: usize, label: &str, ranking: &str) -> String {
    if count < highlights {
        format!("{count} {label}:")
    } else {
        format!("{count} {label}. Here is the {highlights} {ranking}:")
    }
}

fn days_ago(days: Option<i64>) -> String {
    days.map_or_else(
        || "at an unknown date".to_owned(),
        |value| format!("{value} days ago"),
    )
}

fn write_entry<W: Write>(
    writer: &mut W,
    organization: &str,
    pr: &PullRequest,
    detail: &str,
) -> Result<(), ReportError> {
    writeln!(
        writer,
        "- {title} <https://github.com/{organization}/{repository}/pull/{number}>\n\t({repository}) {detail}",
        title = pr.title,
        repository = pr.repository,
        number = pr.number,
    )
    .map_err(|error| io_error(&error))
}

/// Converts an I/O error to a [`ReportError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ReportError {
    ReportError::Io {
        message: error.to_string(),
    }
}
