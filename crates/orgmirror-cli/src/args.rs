use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "orgmirror")]
#[command(about = "Normalize CRM describe metadata into a canonical schema draft", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize describe JSON files into a canonical schema
    Normalize {
        /// Describe payloads: a single object, an array, or a map keyed
        /// by object name
        files: Vec<PathBuf>,
    },

    /// Summarize describe payloads without normalizing them
    Inspect {
        file: PathBuf,
    },

    /// Print the resolved data directory and configuration
    Config,
}
