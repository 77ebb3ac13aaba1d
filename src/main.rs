//! avdinfo - Android Virtual Device property reader
//!
//! Command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use avdinfo::commands::{AvdCommand, GetIntCommand, ListCommand, PropsCommand, SuffixCommand};
use avdinfo::core::{AppConfig, APP_NAME, VERSION};

#[derive(Parser)]
#[command(name = "avdinfo", version, about = "Read Android Virtual Device properties")]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show API level, adbd mode and all entries of a property file
    Props {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Read one property as a 32-bit integer
    GetInt {
        file: PathBuf,
        key: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        default: i32,
    },
    /// Show the emulator backend for a CPU architecture
    Suffix { arch: String },
    /// Inspect an AVD by name
    Avd {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// List AVD names
    List,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // The logging level comes from the config, so anything logged while
    // loading it is emitted before a subscriber exists and is dropped.
    let loaded = match cli.config {
        Some(ref path) => AppConfig::load_from(path).await,
        None => AppConfig::load().await,
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging(&config, cli.verbose)?;
    debug!("{} v{} starting", APP_NAME, VERSION);
    debug!("Configuration: {:?}", config);

    let output = match cli.command {
        Commands::Props { file, json } => PropsCommand { file, json }.execute().await?,
        Commands::GetInt { file, key, default } => {
            GetIntCommand { file, key, default }.execute().await?
        }
        Commands::Suffix { arch } => match (SuffixCommand { arch: arch.clone() }).execute() {
            Some(out) => out,
            None => {
                error!("No emulator backend for architecture {:?}", arch);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Avd { name, json } => AvdCommand { name, json }.execute(&config).await?,
        Commands::List => ListCommand.execute(&config).await?,
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging(config: &AppConfig, verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
