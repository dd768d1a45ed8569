//! Interactive single-screen mode.
//!
//! Lines typed at the prompt are added to the active list; lines starting
//! with `:` are screen commands. A leading `::` adds the line with a single
//! literal colon.

use std::io::{self, BufRead, Write};

use worktrip_core::config::StoreConfig;
use worktrip_core::services::ListService;
use worktrip_core::state::ScreenState;
use worktrip_core::{Category, Error};

use crate::commands::common::PromptConfirm;
use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    Select(Category),
    Toggle,
    Delete(usize),
    Help,
    Quit,
    Submit(String),
    Unknown(String),
}

pub fn parse_screen_command(line: &str) -> ScreenCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = line.trim_start().strip_prefix("::") {
        return ScreenCommand::Submit(format!(":{text}"));
    }
    let Some(command) = line.trim().strip_prefix(':') else {
        return ScreenCommand::Submit(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();

    match (name, argument) {
        ("w" | "work", None) => ScreenCommand::Select(Category::Work),
        ("t" | "travel", None) => ScreenCommand::Select(Category::Travel),
        ("toggle", None) => ScreenCommand::Toggle,
        ("h" | "help" | "?", None) => ScreenCommand::Help,
        ("q" | "quit" | "exit", None) => ScreenCommand::Quit,
        ("d" | "delete", Some(row)) => row
            .parse::<usize>()
            .map_or_else(|_| ScreenCommand::Unknown(line.trim().to_string()), ScreenCommand::Delete),
        _ => ScreenCommand::Unknown(line.trim().to_string()),
    }
}

pub async fn run_screen(config: &StoreConfig) -> Result<(), CliError> {
    let service = ListService::open(config);
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    run_screen_with(&service, &mut input, &mut output).await
}

pub async fn run_screen_with<R: BufRead, W: Write>(
    service: &ListService,
    input: &mut R,
    output: &mut W,
) -> Result<(), CliError> {
    let mut state = ScreenState::new();

    writeln!(output, "Loading...")?;
    state.hydrate(service).await;
    render(&mut state, service, output).await?;

    loop {
        write!(output, "{}> ", state.placeholder())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_screen_command(&line) {
            ScreenCommand::Quit => break,
            ScreenCommand::Help => {
                write_help(output)?;
                continue;
            }
            ScreenCommand::Select(category) => state.select(category),
            ScreenCommand::Toggle => state.toggle(),
            ScreenCommand::Delete(row) => {
                let visible = state.visible(service).await;
                match row.checked_sub(1).and_then(|index| visible.get(index)) {
                    Some((key, _)) => {
                        let result = service
                            .remove(key, PromptConfirm::new(input, output))
                            .await;
                        if let Err(error) = result {
                            state.error_message = Some(describe(service, &error).await);
                        }
                    }
                    None => state.error_message = Some(CliError::NoSuchRow(row).to_string()),
                }
            }
            ScreenCommand::Submit(text) => {
                state.set_input(text);
                if let Err(error) = state.submit(service).await {
                    tracing::warn!("Failed to add item: {error}");
                }
            }
            ScreenCommand::Unknown(command) => {
                state.error_message = Some(format!("Unknown command '{command}'; type :help"));
            }
        }

        render(&mut state, service, output).await?;
    }

    Ok(())
}

async fn describe(service: &ListService, error: &Error) -> String {
    match error {
        Error::Storage(_) | Error::Io(_) => service
            .error_message()
            .await
            .unwrap_or_else(|| error.to_string()),
        _ => error.to_string(),
    }
}

async fn render<W: Write>(
    state: &mut ScreenState,
    service: &ListService,
    output: &mut W,
) -> Result<(), CliError> {
    writeln!(output)?;
    let tabs = Category::ALL
        .iter()
        .map(|category| {
            if *category == state.active {
                format!("[{category}]")
            } else {
                format!(" {category} ")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(output, "{tabs}")?;

    let visible = state.visible(service).await;
    if visible.is_empty() {
        writeln!(output, "  (empty)")?;
    }
    for (index, (_, item)) in visible.iter().enumerate() {
        writeln!(output, "{:>3}. {}", index + 1, item.text)?;
    }

    if let Some(message) = state.error_message.take() {
        writeln!(output, "! {message}")?;
    }
    Ok(())
}

fn write_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Type text and press enter to add it to the active list.")?;
    writeln!(output, "Start with :: to add text that begins with a colon.")?;
    writeln!(output, "  :work, :w        show the work list")?;
    writeln!(output, "  :travel, :t      show the travel list")?;
    writeln!(output, "  :toggle          switch lists")?;
    writeln!(output, "  :delete N, :d N  delete the N-th item shown")?;
    writeln!(output, "  :quit, :q        leave")
}
