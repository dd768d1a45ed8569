use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use worktrip_core::config::StoreConfig;
use worktrip_core::services::ListService;
use worktrip_core::store::{Confirm, Confirmation, DeletePrompt, Hydration};
use worktrip_core::util::normalize_text;
use worktrip_core::{Category, Item, ItemKey};

use crate::error::CliError;

const SHORT_KEY_LEN: usize = 13;

#[derive(Debug, Serialize)]
pub struct ItemListItem {
    pub key: String,
    pub text: String,
    pub category: String,
    pub work: bool,
    pub created_at: Option<i64>,
    pub age: Option<String>,
}

pub const fn category_for(travel: bool) -> Category {
    if travel {
        Category::Travel
    } else {
        Category::Work
    }
}

pub fn resolve_config(data_path: Option<PathBuf>) -> Result<StoreConfig, CliError> {
    let default_path = dirs::data_dir().map(|dir| StoreConfig::default_path_in(&dir));
    Ok(StoreConfig::from_env(data_path, default_path)?)
}

/// Open and hydrate the list, refusing to continue past a failed load.
///
/// One-shot commands write the whole collection back, so carrying on after a
/// failed load would replace the unreadable data with an almost empty list.
pub async fn open_list(config: &StoreConfig) -> Result<ListService, CliError> {
    let service = ListService::open(config);
    match service.load().await {
        Hydration::Failed(message) => Err(CliError::LoadFailed(message)),
        Hydration::Loaded(_) | Hydration::Empty => Ok(service),
    }
}

/// Item text from the arguments, else from piped stdin; `None` when blank.
pub fn resolve_item_text(content_parts: &[String]) -> Result<Option<String>, CliError> {
    if let Some(text) = normalize_text(&content_parts.join(" ")) {
        return Ok(Some(text));
    }

    read_piped_stdin()
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_text(&buffer))
}

pub fn short_key(key: &ItemKey) -> String {
    key.as_str().chars().take(SHORT_KEY_LEN).collect()
}

pub fn format_item_lines(items: &[(ItemKey, Item)], now_ms: i64) -> Vec<String> {
    items
        .iter()
        .map(|(key, item)| {
            let short_key = short_key(key);
            match key.created_at_millis() {
                Some(created_at) => format!(
                    "{short_key:<13}  {:<40}  {}",
                    item.text,
                    format_age(created_at, now_ms)
                ),
                None => format!("{short_key:<13}  {}", item.text),
            }
        })
        .collect()
}

pub fn item_to_list_item(key: &ItemKey, item: &Item) -> ItemListItem {
    let now_ms = Utc::now().timestamp_millis();
    let created_at = key.created_at_millis();

    ItemListItem {
        key: key.to_string(),
        text: item.text.clone(),
        category: item.category.label().to_lowercase(),
        work: item.category.is_work(),
        created_at,
        age: created_at.map(|created_at| format_age(created_at, now_ms)),
    }
}

/// Age shown next to an item: minutes and hours for recent items, days
/// within a month, the creation date after that.
pub fn format_age(created_ms: i64, now_ms: i64) -> String {
    let age = Duration::milliseconds(now_ms.saturating_sub(created_ms));

    if age.num_minutes() < 1 {
        "new".to_string()
    } else if age.num_hours() < 1 {
        format!("{} min", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{} h", age.num_hours())
    } else if age.num_days() <= 30 {
        format!("{} d", age.num_days())
    } else {
        DateTime::from_timestamp_millis(created_ms).map_or_else(
            || "-".to_string(),
            |created| created.format("%Y-%m-%d").to_string(),
        )
    }
}

/// Answers a [`DeletePrompt`] by asking on a line-based terminal.
///
/// Only `y`/`yes` confirm; anything else, including end of input, cancels.
pub struct PromptConfirm<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> PromptConfirm<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &DeletePrompt) -> io::Result<Confirmation> {
        writeln!(self.output, "{}", prompt.title)?;
        writeln!(self.output, "{}", prompt.message)?;
        write!(
            self.output,
            "[c] {}  [y] {}: ",
            prompt.cancel_label, prompt.confirm_label
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(parse_confirmation(&answer))
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<'_, R, W> {
    fn confirm(&mut self, prompt: &DeletePrompt) -> Confirmation {
        self.ask(prompt).unwrap_or_else(|error| {
            tracing::warn!("Delete prompt failed: {error}");
            Confirmation::Cancel
        })
    }
}

pub fn parse_confirmation(answer: &str) -> Confirmation {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirm,
        _ => Confirmation::Cancel,
    }
}
