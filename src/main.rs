mod config;
mod error;
mod lidarr_rs;
mod logging;
mod plex_rs;
mod ports;
mod services;

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::{Result, eyre::Context};

use crate::{
    config::{Config, SyncMode, parse_dry_run},
    logging::setup_logging,
    services::dislike_sync::{SyncResult, SyncRunner},
    services::lidarr::client::LidarrHttpAdapter,
    services::plex::client::PlexHttpAdapter,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The config file to use
    #[arg(short, long, env = "PLEX_LIDARR_SYNC_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Console log level
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: log::LevelFilter,

    /// File log level
    #[arg(long, default_value = "debug", global = true)]
    log_file_level: log::LevelFilter,

    /// Path to log file
    #[arg(long, env = "PLEX_LIDARR_SYNC_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    settings: SyncArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Sync settings. Each one overrides the same key in the config file.
#[derive(ClapArgs, Debug)]
struct SyncArgs {
    /// URL of the Plex server
    #[arg(long, env = "PLEX_URL", global = true)]
    plex_url: Option<String>,

    /// Plex authentication token
    #[arg(long, env = "PLEX_TOKEN", global = true, hide_env_values = true)]
    plex_token: Option<String>,

    /// Name of the Plex music library
    #[arg(long, env = "PLEX_MUSIC_LIBRARY", global = true)]
    plex_music_library: Option<String>,

    /// Name of the Plex playlist holding disliked albums
    #[arg(long, env = "PLEX_PLAYLIST_NAME", global = true)]
    plex_playlist_name: Option<String>,

    /// URL of the Lidarr server
    #[arg(long, env = "LIDARR_URL", global = true)]
    lidarr_url: Option<String>,

    /// Lidarr API key
    #[arg(long, env = "LIDARR_API_KEY", global = true, hide_env_values = true)]
    lidarr_api_key: Option<String>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(long, env = "REQUEST_TIMEOUT", global = true)]
    request_timeout: Option<u64>,

    /// Preview changes without applying them (default: true)
    #[arg(long, env = "DRY_RUN", global = true, value_parser = parse_dry_run)]
    dry_run: Option<bool>,

    /// What to do with disliked albums (default: delete)
    #[arg(long, value_enum, env = "SYNC_MODE", global = true)]
    mode: Option<SyncMode>,

    /// Lidarr tag applied in tag mode (default: disliked)
    #[arg(long, env = "LIDARR_TAG_LABEL", global = true)]
    tag_label: Option<String>,
}

impl From<SyncArgs> for Config {
    fn from(args: SyncArgs) -> Self {
        Config {
            plex_url: args.plex_url,
            plex_token: args.plex_token,
            plex_music_library: args.plex_music_library,
            plex_playlist_name: args.plex_playlist_name,
            lidarr_url: args.lidarr_url,
            lidarr_api_key: args.lidarr_api_key,
            request_timeout: args.request_timeout,
            dry_run: args.dry_run,
            mode: args.mode,
            tag_label: args.tag_label,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remediate the albums in the disliked playlist (default)
    Sync,
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

async fn sync(config_path: Option<PathBuf>, overrides: Config) -> Result<SyncResult> {
    let file_config = match config_path {
        Some(path) => Config::from_file(&path),
        None => Config::load(),
    }
    .with_context(|| "Failed to load plex-lidarr-sync config")?;

    let config = file_config.merge(overrides).validate()?;

    log::info!("Connecting to Plex server at {}", config.plex_url);
    let plex = PlexHttpAdapter::new(
        config.plex_url,
        config.plex_token,
        config.request_timeout,
    )?;
    let lidarr = LidarrHttpAdapter::new(
        config.lidarr_url,
        config.lidarr_api_key,
        config.request_timeout,
    )?;

    SyncRunner::new(config.sync, plex, lidarr).run().await
}

/// Exit status for a command line that clap rejected.
///
/// `--help` and `--version` succeed. Every other error is a configuration
/// failure and exits 1, not clap's usage status 2.
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Single line, uncoloured summary of a failed run.
fn failure_message(err: &color_eyre::Report) -> String {
    format!("Sync failed: {err:#}")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        }
    };
    setup_logging(args.log_level, args.log_file.clone(), args.log_file_level)?;

    match args.command.unwrap_or(Commands::Sync) {
        Commands::Sync => {
            log::debug!("Starting sync");
            if let Err(err) = sync(args.config, args.settings.into()).await {
                log::error!("{}", failure_message(&err));
                std::process::exit(1);
            }
        }
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                let path = Config::create_default()?;
                log::info!("Default config at {}", path.display());
            }
            ConfigCommands::Path => match Config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
    }

    Ok(())
}
