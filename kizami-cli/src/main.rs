//! Entry point for the kizami binary

use anyhow::Result;
use clap::Parser;
use kizami_cli::commands::Commands;

/// Chunk text documents into bounded-size pieces for indexing pipelines
#[derive(Debug, Parser)]
#[command(name = "kizami", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
