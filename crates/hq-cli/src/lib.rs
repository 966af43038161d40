//! CLI library components for harmona-scan.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
