//! `--show-config` report

use colored::Colorize;
use trivia_domain::ConfigIssue;

/// A config file location and whether it was found
pub struct ConfigSource {
    pub label: &'static str,
    pub location: String,
    pub found: bool,
}

/// Renders the effective configuration for the terminal
pub struct ConfigReport<'a> {
    pub sources: &'a [ConfigSource],
    /// Effective configuration, serialized as TOML
    pub effective_toml: &'a str,
    pub issues: &'a [ConfigIssue],
    pub settings_path: Option<String>,
}

impl ConfigReport<'_> {
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&Self::section_header("Configuration sources (in priority order)"));
        for source in self.sources {
            let marker = if source.found {
                "[FOUND]".green().to_string()
            } else {
                "[     ]".dimmed().to_string()
            };
            out.push_str(&format!(
                "  {} {:<8} {}\n",
                marker, source.label, source.location
            ));
        }
        out.push_str(&format!("  {} {:<8} built-in defaults\n", "[     ]".dimmed(), "Default"));

        if let Some(path) = &self.settings_path {
            out.push_str(&Self::section_header("Player settings"));
            out.push_str(&format!("  {}\n", path));
        }

        out.push_str(&Self::section_header("Effective configuration"));
        for line in self.effective_toml.lines() {
            if line.starts_with('[') {
                out.push_str(&format!("{}\n", line.cyan().bold()));
            } else {
                out.push_str(&format!("{}\n", line));
            }
        }

        if !self.issues.is_empty() {
            out.push_str(&Self::section_header("Issues"));
            for issue in self.issues {
                let line = issue.to_string();
                if issue.is_error() {
                    out.push_str(&format!("  {}\n", line.red()));
                } else {
                    out.push_str(&format!("  {}\n", line.yellow()));
                }
            }
        }

        out
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
