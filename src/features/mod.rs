//! Feature implementations for linktasker.
//!
//! - Statistics and streak analytics
//! - Demo data generation

pub mod stats;
