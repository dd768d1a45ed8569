use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "worktrip")]
#[command(about = "Keep a work list and a travel list from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the local storage file
    #[arg(long, global = true, value_name = "PATH")]
    pub data_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the work list (or the travel list)
    #[command(alias = "new")]
    Add {
        /// Add to the travel list instead of the work list
        #[arg(long)]
        travel: bool,
        /// Item text
        content: Vec<String>,
    },
    /// List the items of one category
    List {
        /// Show the travel list instead of the work list
        #[arg(long)]
        travel: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an item after confirmation
    Delete {
        /// Item key or unique key prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the interactive list screen
    Screen,
    /// Print the resolved storage configuration
    Config,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
