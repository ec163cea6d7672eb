//! Demo data command implementation.

use chrono::Utc;

use crate::cli::args::{DemoCommands, OutputFormat};
use crate::error::LinkTaskerError;
use crate::features::stats::demo;
use crate::output::to_json;
use crate::storage::JsonStore;

/// Execute demo subcommands.
pub fn demo(
    store: &JsonStore,
    cmd: DemoCommands,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    match cmd {
        DemoCommands::Seed { force } => seed(store, force, format),
    }
}

/// Write the sample records into the store.
fn seed(store: &JsonStore, force: bool, format: OutputFormat) -> Result<String, LinkTaskerError> {
    if !force {
        let has_tasks = !store.load_tasks()?.is_empty();
        let has_links = !store.load_links()?.is_empty();
        if has_tasks || has_links {
            return Err(LinkTaskerError::Validation(
                "store already has data; pass --force to overwrite".to_string(),
            ));
        }
    }

    let now = Utc::now();
    let tasks = demo::sample_tasks(now);
    let links = demo::sample_links(now);
    store.save_tasks(&tasks)?;
    store.save_links(&links)?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "Seeded {} sample tasks and {} sample links",
            tasks.len(),
            links.len()
        )),
        OutputFormat::Json => to_json(&serde_json::json!({
            "tasks": tasks.len(),
            "links": links.len(),
        })),
    }
}
