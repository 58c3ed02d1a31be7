mod commands;
mod discover;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use flat_routes::{FlatRoutesConfig, RoutesFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flat-routes")]
#[command(version, about = "Compile flat route module files into a route manifest", long_about = None)]
struct Cli {
    /// App directory (overrides routing.app_dir)
    #[arg(long, global = true)]
    app_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, global = true, default_value = flat_routes::config::CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route tree
    Routes {
        /// Output format: jsx or json
        #[arg(short, long, default_value = "jsx")]
        format: RoutesFormat,
    },

    /// Compile the routes and report errors
    Check,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = FlatRoutesConfig::load(&cli.config)?;
    let app_dir = cli
        .app_dir
        .unwrap_or_else(|| PathBuf::from(&config.routing.app_dir));

    match cli.command {
        Commands::Routes { format } => commands::routes::execute(&app_dir, &config, format),
        Commands::Check => commands::check::execute(&app_dir, &config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
