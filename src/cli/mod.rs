//! CLI handlers for the `ghreport` binary.
//!
//! - [`report`]: Builds the gateway from configuration and runs the report
//! - [`output`]: Plain-text digest rendering

pub mod output;
pub mod report;
