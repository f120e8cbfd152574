use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod storage;

use commands::{ConfigCommand, IngredientCommand, NewCommand, PortionsCommand, ShowCommand, StepCommand};
use config::Config;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(version)]
#[command(about = "A recipe book with portion scaling", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new recipe file
    New(NewCommand),

    /// Show a recipe, optionally scaled to a serving count
    Show(ShowCommand),

    /// Edit the canonical portion count a recipe is written for
    Portions(PortionsCommand),

    /// Edit the ingredient list
    Ingredient(IngredientCommand),

    /// Edit the preparation steps
    Step(StepCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config)?;

    match &cli.command {
        Commands::New(cmd) => cmd.run(&config),
        Commands::Show(cmd) => cmd.run(&config),
        Commands::Portions(cmd) => cmd.run(&config),
        Commands::Ingredient(cmd) => cmd.run(&config),
        Commands::Step(cmd) => cmd.run(&config),
        Commands::Config(cmd) => cmd.run(&config),
    }
}
