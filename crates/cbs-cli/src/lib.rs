//! CLI library components for the clinical billing dataset generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
