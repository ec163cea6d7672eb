//! Storage layer for linktasker.
//!
//! Whole-collection JSON persistence: `tasks.json` and `links.json` under
//! the app directory, plus the drafts and validation used to mutate them.

mod store;

pub use store::{parse_tags, JsonStore, LinkDraft, TaskDraft};
