//! Presentation layer for trivia-grader
//!
//! This crate contains the CLI definition, the terminal UI and plain
//! console output such as the configuration report.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::config_report::{ConfigReport, ConfigSource};
pub use tui::TuiApp;
