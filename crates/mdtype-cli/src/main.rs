//! mdtype - streaming answer demo for the terminal
//!
//! Reveals a markdown answer one character at a time with:
//! - Throttled auto-scroll that stops once you scroll up
//! - Light/dark theme switching
//! - Toggleable math span rendering
//! - Pause and resume of the reveal

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mdtype_core::config::ConfigOverrides;
use mdtype_core::constants::ui::LOG_FILE_NAME;
use mdtype_core::{paths, DemoConfig, DemoDocument, ThemeMode};

mod tui;

/// mdtype - streaming markdown demo
#[derive(Parser)]
#[command(name = "mdtype")]
#[command(about = "Watch an answer type itself out in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial theme (light or dark)
    #[arg(short, long)]
    theme: Option<ThemeMode>,

    /// Start with math rendering disabled
    #[arg(long)]
    no_math: bool,

    /// Milliseconds between revealed characters
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,

    /// Milliseconds for the auto-scroll and scroll-tracking throttles
    #[arg(long, value_name = "MS")]
    throttle: Option<u64>,

    /// JSON document ({"content": "..."}) to show instead of the built-in answer
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo (default)
    Demo,

    /// Print the effective configuration as TOML
    Config,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file; stdout and stderr belong to the TUI
/// Open the log file in `dir` for appending, creating both if needed
fn open_log_file(dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}

fn init_logging() {
    let Ok(log_file) = open_log_file(&paths::logs_dir()) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = DemoConfig::load(cli.config.as_deref()).context("loading config")?;
    ConfigOverrides {
        typing_interval_ms: cli.interval,
        throttle_ms: cli.throttle,
        theme: cli.theme,
        disable_math: cli.no_math,
        document: cli.document.clone(),
    }
    .apply(&mut config);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();
    // `config` only prints; the log belongs to demo runs
    if !matches!(cli.command, Some(Commands::Config)) {
        init_logging();
    }
    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Config) => {
            print!("{}", config.to_toml_string()?);
        }
        Some(Commands::Demo) | None => {
            let document = DemoDocument::load_or_builtin(config.document.as_deref())
                .context("loading document")?;
            tracing::info!(
                theme = %config.theme,
                math = config.math,
                interval_ms = config.typing_interval_ms,
                throttle_ms = config.throttle_ms,
                "Starting demo"
            );
            let mut app = tui::App::new(config, document);
            app.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"dark\"\ntyping_interval_ms = 12\n").unwrap();

        let cli = Cli::parse_from([
            "mdtype",
            "--config",
            path.to_str().unwrap(),
            "--theme",
            "light",
            "--no-math",
            "--throttle",
            "80",
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.typing_interval_ms, 12);
        assert_eq!(config.throttle_ms, 80);
        assert!(!config.math);
    }

    #[test]
    fn test_log_file_keeps_earlier_runs() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        let mut first = open_log_file(&logs).unwrap();
        writeln!(first, "first run").unwrap();
        drop(first);

        let mut second = open_log_file(&logs).unwrap();
        writeln!(second, "second run").unwrap();
        drop(second);

        let text = std::fs::read_to_string(logs.join(LOG_FILE_NAME)).unwrap();
        assert_eq!(text, "first run\nsecond run\n");
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["mdtype", "--theme", "sepia"]).is_err());
    }
}
