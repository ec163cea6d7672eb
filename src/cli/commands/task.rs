//! Task command implementations.

use chrono::{DateTime, Local, Utc};

use crate::cli::args::{OutputFormat, TaskAddArgs, TaskEditArgs, TaskListArgs};
use crate::core::datetime::{local_midnight, parse_due_date};
use crate::core::{filter_tasks, ItemFilter};
use crate::error::LinkTaskerError;
use crate::output;
use crate::storage::{JsonStore, TaskDraft};

/// Resolve a natural-language or ISO due date to the start of that day.
fn parse_due(input: &str) -> Result<DateTime<Utc>, LinkTaskerError> {
    let today = Local::now().date_naive();
    let date = parse_due_date(input, today).ok_or_else(|| {
        LinkTaskerError::Validation(format!("could not parse due date '{input}'"))
    })?;
    local_midnight(date).ok_or_else(|| {
        LinkTaskerError::Validation(format!("due date '{input}' is out of range"))
    })
}

/// Add a new task.
pub fn add(
    store: &JsonStore,
    args: TaskAddArgs,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let draft = TaskDraft {
        title: args.title,
        description: args.description,
        due_date: Some(parse_due(&args.due)?),
        priority: args.priority.into(),
        category_id: args.category,
    };

    let task = store.add_task(draft, Utc::now())?;
    match format {
        OutputFormat::Pretty => Ok(format!("Added task '{}' ({})", task.title, task.id)),
        OutputFormat::Json => output::to_json(&task),
    }
}

/// List tasks, optionally filtered.
pub fn list(
    store: &JsonStore,
    args: TaskListArgs,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let tasks = store.load_tasks()?;
    let now = Utc::now();

    let filter = ItemFilter::new()
        .with_category(args.category)
        .with_state(args.status.map(Into::into))
        .with_priority(args.priority.map(Into::into))
        .with_text(args.search);

    let filtered = filter_tasks(&tasks, &filter, now);
    output::format_tasks(&filtered, "Tasks", format, now)
}

/// Toggle a task's completion state.
pub fn done(store: &JsonStore, id: &str, format: OutputFormat) -> Result<String, LinkTaskerError> {
    let task = store.toggle_task(id, Utc::now())?;
    match format {
        OutputFormat::Pretty => {
            if task.is_completed {
                Ok(format!("Completed task '{}'", task.title))
            } else {
                Ok(format!("Reopened task '{}'", task.title))
            }
        },
        OutputFormat::Json => output::to_json(&task),
    }
}

/// Edit a task's fields, keeping anything not specified.
pub fn edit(
    store: &JsonStore,
    args: TaskEditArgs,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let tasks = store.load_tasks()?;
    let existing = tasks
        .iter()
        .find(|t| t.id == args.id)
        .ok_or_else(|| LinkTaskerError::NotFound(format!("task {}", args.id)))?;

    let due_date = match args.due {
        Some(due) => Some(parse_due(&due)?),
        None => existing.due_date,
    };

    let draft = TaskDraft {
        title: args.title.unwrap_or_else(|| existing.title.clone()),
        description: args
            .description
            .unwrap_or_else(|| existing.description.clone()),
        due_date,
        priority: args.priority.map_or(existing.priority, Into::into),
        category_id: args.category.unwrap_or_else(|| existing.category_id.clone()),
    };

    let task = store.update_task(&args.id, draft)?;
    match format {
        OutputFormat::Pretty => Ok(format!("Updated task '{}'", task.title)),
        OutputFormat::Json => output::to_json(&task),
    }
}

/// Delete a task.
pub fn rm(store: &JsonStore, id: &str, format: OutputFormat) -> Result<String, LinkTaskerError> {
    store.delete_task(id)?;
    match format {
        OutputFormat::Pretty => Ok(format!("Deleted task {id}")),
        OutputFormat::Json => output::to_json(&serde_json::json!({ "deleted": id })),
    }
}
