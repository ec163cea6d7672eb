//! Link command implementations.

use chrono::Utc;

use crate::cli::args::{LinkAddArgs, LinkEditArgs, LinkListArgs, OutputFormat};
use crate::core::{filter_links, ItemFilter};
use crate::error::LinkTaskerError;
use crate::output;
use crate::storage::{parse_tags, JsonStore, LinkDraft};

/// Save a new link.
pub fn add(
    store: &JsonStore,
    args: LinkAddArgs,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let draft = LinkDraft {
        url: args.url,
        title: args.title,
        description: args.description,
        category_id: args.category,
        tags: parse_tags(&args.tags),
    };

    let link = store.add_link(draft, Utc::now())?;
    match format {
        OutputFormat::Pretty => Ok(format!("Saved link '{}' ({})", link.title, link.id)),
        OutputFormat::Json => output::to_json(&link),
    }
}

/// List links, optionally filtered.
pub fn list(
    store: &JsonStore,
    args: LinkListArgs,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let links = store.load_links()?;

    let filter = ItemFilter::new()
        .with_category(args.category)
        .with_text(args.search);

    let filtered = filter_links(&links, &filter);
    output::format_links(&filtered, "Links", format)
}

/// Edit a link's fields, keeping anything not specified.
pub fn edit(
    store: &JsonStore,
    args: LinkEditArgs,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let links = store.load_links()?;
    let existing = links
        .iter()
        .find(|l| l.id == args.id)
        .ok_or_else(|| LinkTaskerError::NotFound(format!("link {}", args.id)))?;

    let draft = LinkDraft {
        url: args.url.unwrap_or_else(|| existing.url.clone()),
        title: args.title.unwrap_or_else(|| existing.title.clone()),
        description: args
            .description
            .unwrap_or_else(|| existing.description.clone()),
        category_id: args.category.unwrap_or_else(|| existing.category_id.clone()),
        tags: args
            .tags
            .map_or_else(|| existing.tags.clone(), |t| parse_tags(&t)),
    };

    let link = store.update_link(&args.id, draft)?;
    match format {
        OutputFormat::Pretty => Ok(format!("Updated link '{}'", link.title)),
        OutputFormat::Json => output::to_json(&link),
    }
}

/// Delete a link.
pub fn rm(store: &JsonStore, id: &str, format: OutputFormat) -> Result<String, LinkTaskerError> {
    store.delete_link(id)?;
    match format {
        OutputFormat::Pretty => Ok(format!("Deleted link {id}")),
        OutputFormat::Json => output::to_json(&serde_json::json!({ "deleted": id })),
    }
}
