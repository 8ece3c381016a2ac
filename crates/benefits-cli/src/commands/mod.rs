//! Subcommand implementations

pub mod dashboard;
pub mod report;
