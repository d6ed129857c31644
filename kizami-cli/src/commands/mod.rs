//! CLI command implementations

use clap::Subcommand;
use kizami_core::Language;

use crate::error::CliResult;

pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean and split text files into chunks
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available tokenizer languages
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            ListCommands::Languages => {
                for language in Language::all() {
                    println!("{}", language.code());
                }
            }
            ListCommands::Formats => {
                println!("text");
                println!("json");
            }
        }
        Ok(())
    }
}
