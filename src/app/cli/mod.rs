//! CLI Adapter.

mod catalog;
mod generate;

use crate::app::logging;
use crate::domain::{AppError, InferenceConfig};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "usecase-gen")]
#[command(version)]
#[command(
    about = "Generate high-impact Agentic AI use cases for a persona, domain, and pain point",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the use case form and generate use cases
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Explore agent types by category
    #[clap(visible_alias = "a")]
    Agents,
    /// List supported domains
    Domains,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    logging::init_cli_logger(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => {
            generate::run_generate(args, InferenceConfig::process_token())
        }
        Commands::Agents => catalog::run_agents(),
        Commands::Domains => catalog::run_domains(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
