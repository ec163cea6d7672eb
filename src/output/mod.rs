//! Output formatting for linktasker.
//!
//! This module provides formatters for displaying tasks and links in
//! pretty or JSON form.

mod json;
mod pretty;

use chrono::{DateTime, Utc};

use crate::cli::args::OutputFormat;
use crate::error::LinkTaskerError;
use crate::model::{Link, Task};

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `LinkTaskerError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[&Task],
    title: &str,
    format: OutputFormat,
    now: DateTime<Utc>,
) -> Result<String, LinkTaskerError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, now)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format links based on output format
///
/// # Errors
///
/// Returns `LinkTaskerError::Parse` if JSON serialization fails.
pub fn format_links(
    links: &[&Link],
    title: &str,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    match format {
        OutputFormat::Pretty => Ok(format_links_pretty(links, title)),
        OutputFormat::Json => format_links_json(links, title),
    }
}
