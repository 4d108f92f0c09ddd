mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tally_router::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version, about = "Tally route table inspector", long_about = None)]
struct Cli {
    /// Path to the configuration file [default: ./tally.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes in match order
    Routes,

    /// Resolve a URL to its page and parameters
    Resolve {
        /// URL path, e.g. /s/abc123/tok1
        path: String,
    },

    /// Build the URL of a named route
    Generate {
        /// Route name, e.g. session
        name: String,

        /// Parameters as key=value
        #[arg(value_parser = commands::parse_key_value)]
        params: Vec<(String, String)>,
    },

    /// Replay navigations through an in-memory history
    Navigate {
        /// URLs to visit in order; `back` and `forward` step through history
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let router = config.routing.router()?;

    match cli.command {
        Commands::Routes => commands::routes::execute(&router, cli.json)?,
        Commands::Resolve { path } => commands::resolve::execute(&router, &path, cli.json)?,
        Commands::Generate { name, params } => {
            commands::generate::execute(&router, &name, params, cli.json)?
        }
        Commands::Navigate { steps } => {
            commands::navigate::execute(&router, config.routing.memory_history(), &steps, cli.json)?
        }
    }

    Ok(())
}
