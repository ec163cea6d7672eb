//! Configuration management for linktasker.
//!
//! This module handles loading and saving configuration from `~/.linktasker/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StatsConfig};
