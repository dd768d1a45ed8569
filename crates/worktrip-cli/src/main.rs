//! worktrip CLI - Work and travel lists from the terminal
//!
//! One-shot commands for scripting plus an interactive list screen.

mod cli;
mod commands;
mod error;


use std::io;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::resolve_config;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::list::run_list;
use crate::commands::screen::run_screen;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "worktrip=info".parse::<tracing_subscriber::filter::Directive>() {
        env_filter = env_filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell, output }) = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let config = resolve_config(cli.data_path)?;

    match cli.command {
        Some(Commands::Add { travel, content }) => run_add(&content, travel, &config).await?,
        Some(Commands::List { travel, json }) => run_list(travel, json, &config).await?,
        Some(Commands::Delete { id, yes }) => run_delete(&id, yes, &config).await?,
        Some(Commands::Config) => run_config(&config)?,
        Some(Commands::Screen) | None => run_screen(&config).await?,
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
