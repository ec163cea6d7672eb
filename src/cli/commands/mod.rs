//! Command implementations for linktasker.

mod completions;
mod demo;
pub mod link;
mod stats;
pub mod task;

pub use completions::completions;
pub use demo::demo;
pub use stats::stats;

pub use link as link_cmd;
pub use task as task_cmd;
