//! Plain terminal output (outside the TUI)

pub mod config_report;
