//! CLI subcommand handlers.

pub mod config;
pub mod export;
pub mod print;
