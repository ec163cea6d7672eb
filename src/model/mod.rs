//! Data model: task and link records plus the fixed lookup registries.

pub mod registry;
mod types;

pub use registry::{category_by_id, CategoryDef, CATEGORIES, UNCATEGORIZED};
pub use types::{Link, Priority, Task, TaskState};
