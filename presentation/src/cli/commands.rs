//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-grader
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(author, version, about = "Terminal trivia game with AI-graded answers")]
#[command(long_about = r#"
Trivia asks the questions of a question set one at a time. Your free-text
answer is graded by a chat-completion model, so spelling mistakes and
different phrasings are accepted. A correct answer moves on to the next
question.

A question set is a JSON array:
  [{"question": "2+2?", "answer": "4"}, ...]

Configuration files are loaded from (in priority order):
1. TRIVIA_SECTION__KEY environment variables
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-grader/config.toml   Global config

Example:
  trivia --questions capitals.json --token sk-...
  trivia --auto-speak
"#)]
pub struct Cli {
    /// Import a question set (JSON file) into the saved settings
    #[arg(short, long, value_name = "FILE")]
    pub questions: Option<PathBuf>,

    /// Save this API token into the settings
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Speak every AI message once it has been typed out
    #[arg(long)]
    pub auto_speak: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "trivia",
            "-q",
            "set.json",
            "--token",
            "sk-test",
            "--auto-speak",
            "-vv",
        ]);
        assert_eq!(cli.questions, Some(PathBuf::from("set.json")));
        assert_eq!(cli.token.as_deref(), Some("sk-test"));
        assert!(cli.auto_speak);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.show_config);
    }
}
