//! txboard main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use txboard_api::{start_server, AppState};
use txboard_config::Config;

#[derive(Parser, Debug)]
#[command(name = "txboard")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web front-end for a signed-transactions REST backend", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    // Logging is configured from the file, so the outcome is reported after init
    let loaded = Config::load(args.config.clone());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(e) if e.is_recoverable() => Config::default(),
        Err(e) => {
            eprintln!("{}", e.to_details());
            anyhow::bail!("invalid configuration in {}", args.config.display());
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    match loaded {
        Ok(_) => log::info!("Config loaded from {}", args.config.display()),
        Err(e) => log::warn!("{}; using built-in defaults", e),
    }

    let rt = Runtime::new()?;
    let served = rt.block_on(async {
        let state = AppState::from_config(config);
        start_server(state).await
    });

    if let Err(e) = &served {
        log::error!("Server failed: {}", e);
    }
    served.context("server failed")
}
