//! Command-line interface for the `sgraph` tool.

pub mod commands;
