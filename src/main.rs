use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mlb::config::{self, Config};
use mlb::data_provider::MlbDataProvider;
use mlb::stats_api::StatsApiClient;
use mlb::{commands, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "mlb")]
#[command(
    about = "MLB scores and standings dashboard",
    long_about = "MLB scores and standings dashboard\n\nIf no command is specified, the program shows a self-rotating dashboard of today's games and the standings. Press q or Esc to quit."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error, or a tracing filter)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use fixture data instead of the MLB Stats API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display today's games
    Scores,
    /// Display current standings
    Standings {
        /// Only this division, e.g. "AL East" or "NL Wild Card"
        #[arg(short, long)]
        division: Option<String>,
    },
    /// Write current standings as JSON
    Export {
        /// Output file (default: stdout)
        path: Option<PathBuf>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{}': {}; using info", log_level, e);
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) -> anyhow::Result<()> {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    print!("{}", toml::to_string_pretty(cfg).context("Failed to encode configuration")?);
    Ok(())
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Pick the data source: the Stats API, or fixtures with `--mock`
fn create_provider(cli: &Cli, config: &Config) -> anyhow::Result<Arc<dyn MlbDataProvider>> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Ok(Arc::new(mlb::dev::MockClient::new()));
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    let client = StatsApiClient::new(config.api_base_url.as_str())
        .context("Failed to create MLB Stats API client")?;
    Ok(Arc::new(client))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn MlbDataProvider,
    command: Commands,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Scores => commands::scores::run(client, config).await,
        Commands::Standings { division } => {
            commands::standings::run(client, division, config).await
        }
        Commands::Export { path } => commands::export::run(client, path.as_deref()).await,
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    // Config doesn't need a client
    if let Some(Commands::Config) = cli.command {
        return handle_config_command(&config);
    }

    let provider = create_provider(&cli, &config)?;

    match cli.command {
        None => tui::run(provider, &config)
            .await
            .context("Dashboard terminal error"),
        Some(command) => execute_command(provider.as_ref(), command, &config).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let config = config.sanitized();
    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
