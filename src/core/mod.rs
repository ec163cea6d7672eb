//! Core abstractions shared across features.

pub mod datetime;
pub mod filter;
mod traits;

pub use filter::{filter_links, filter_tasks, ItemFilter};
pub use traits::{FieldValue, Filterable, Schedulable};
