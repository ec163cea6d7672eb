//! JSON output formatting for linktasker.

use serde::Serialize;
use serde_json::json;

use crate::error::LinkTaskerError;
use crate::model::{Link, Task};

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `LinkTaskerError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[&Task], list_name: &str) -> Result<String, LinkTaskerError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format links as JSON
///
/// # Errors
///
/// Returns `LinkTaskerError::Parse` if JSON serialization fails.
pub fn format_links_json(links: &[&Link], list_name: &str) -> Result<String, LinkTaskerError> {
    let output = json!({
        "list": list_name,
        "count": links.len(),
        "items": links
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `LinkTaskerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, LinkTaskerError> {
    Ok(serde_json::to_string_pretty(value)?)
}
