use anyhow::Result;
use clap::{Parser, Subcommand};
use govinfohub::{
    chat,
    config::{self, LogFormat},
    hub::Hub,
    server,
};
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "govinfohub", version, about = "Ask questions in any language")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "CONFIG_PATH", default_value = "config.yaml")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Chat on the terminal
    Chat,
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve);

    // Load configuration first (before logging setup)
    let config = match config::load_from(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG may hold full filter directives; the config only a level
    let log_level = match std::env::var("RUST_LOG") {
        Ok(directives) => directives,
        Err(_) => {
            let level = config.server.logs.level.clone();
            if let Err(e) = validate_log_level(&level) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            level
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.server.logs.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    info!("Starting GovInfoHub with log level: {}", log_level);

    match command {
        Command::Serve => server::run(config).await?,
        Command::Chat => {
            let hub = Hub::from_config(&config);
            chat::run(&hub, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
        }
    }

    Ok(())
}
