//! CLI entrypoint for trivia-grader
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use trivia_application::{SessionController, Settings, SettingsRepository};
use trivia_domain::parse_question_set;
use trivia_infrastructure::{
    CommandSpeech, ConfigLoader, FileConfig, JsonSettingsRepository, JsonlConversationLogger,
    OpenAiGatewayFactory,
};
use trivia_presentation::{Cli, ConfigReport, ConfigSource, TuiApp};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    let issues = config.validate();

    let settings_repo = settings_repository(&config)?;

    if cli.show_config {
        print_config_report(&cli, &config, &issues, settings_repo.path())?;
        return Ok(());
    }

    // The TUI owns the terminal, so diagnostics go to a file
    let _log_guard = init_logging(&config, cli.verbose);
    info!("Starting trivia-grader");

    for issue in &issues {
        warn!("Config: {}", issue);
    }

    apply_cli_settings(&cli, &settings_repo)?;

    // === Dependency Injection ===
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let gateway_factory = Arc::new(OpenAiGatewayFactory::new(
        config.provider.to_openai_config(),
    ));

    let mut controller = SessionController::new(
        Arc::new(settings_repo),
        gateway_factory,
        config.to_game_config(),
        ui_tx,
    );

    if config.speech.enabled
        && let Some(speech) = CommandSpeech::try_new(
            config.speech.command.as_deref(),
            &config.speech.locale,
            config.speech.preferred_voice.as_deref(),
        )
        .await
    {
        controller = controller.with_speech(Arc::new(speech));
    }

    if let Some(path) = &config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Conversation log: {}", logger.path().display());
        controller = controller.with_conversation_logger(Arc::new(logger));
    }

    let mut app = TuiApp::new(controller, ui_rx);
    app.run().await?;

    info!("trivia-grader exited");
    Ok(())
}

fn settings_repository(config: &FileConfig) -> Result<JsonSettingsRepository> {
    let repo = JsonSettingsRepository::in_data_dir()
        .context("Cannot locate a directory for player settings")?;
    Ok(repo.with_token_env(config.provider.token_env_vars()))
}

/// Persist `--questions`, `--token` and `--auto-speak` before the game starts.
fn apply_cli_settings(cli: &Cli, repo: &JsonSettingsRepository) -> Result<()> {
    if cli.questions.is_none() && cli.token.is_none() && !cli.auto_speak {
        return Ok(());
    }

    let mut settings: Settings = repo.load()?;

    if let Some(path) = &cli.questions {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read question set {}", path.display()))?;
        let questions = parse_question_set(&json)
            .with_context(|| format!("Invalid question set {}", path.display()))?;
        info!("Imported {} questions from {}", questions.len(), path.display());
        settings.question_set_json = json;
    }

    if let Some(token) = &cli.token {
        settings.api_token = token.trim().to_string();
    }

    if cli.auto_speak {
        settings.auto_speak = true;
    }

    repo.save(&settings)?;
    Ok(())
}

fn init_logging(config: &FileConfig, verbose: u8) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir: PathBuf = config
        .logging
        .log_dir
        .clone()
        .or_else(|| ConfigLoader::data_dir().map(|d| d.join("logs")))?;

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Cannot create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::daily(&log_dir, "trivia.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Some(guard)
}

fn print_config_report(
    cli: &Cli,
    config: &FileConfig,
    issues: &[trivia_domain::ConfigIssue],
    settings_path: &Path,
) -> Result<()> {
    let mut sources = Vec::new();
    if let Some(path) = &cli.config {
        sources.push(ConfigSource {
            label: "Explicit",
            location: path.display().to_string(),
            found: path.exists(),
        });
    }
    if !cli.no_config {
        sources.extend(
            ConfigLoader::config_sources()
                .into_iter()
                .map(|(label, location, found)| ConfigSource {
                    label,
                    location,
                    found,
                }),
        );
    }

    let effective_toml =
        toml::to_string_pretty(config).context("Cannot serialize the configuration")?;

    let report = ConfigReport {
        sources: &sources,
        effective_toml: &effective_toml,
        issues,
        settings_path: Some(settings_path.display().to_string()),
    };
    print!("{}", report.render());
    Ok(())
}
