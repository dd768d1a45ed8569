use std::io::{self, Write};

use worktrip_core::config::StoreConfig;
use worktrip_core::services::ListService;
use worktrip_core::ItemKey;

use crate::commands::common::{category_for, open_list, resolve_item_text};
use crate::error::CliError;

/// Blank text is ignored: nothing is written and the command succeeds.
pub async fn run_add(
    content_parts: &[String],
    travel: bool,
    config: &StoreConfig,
) -> Result<(), CliError> {
    let text = resolve_item_text(content_parts)?;

    let service = open_list(config).await?;
    add_item(&service, text.as_deref(), travel, &mut io::stdout()).await?;
    Ok(())
}

pub async fn add_item<W: Write>(
    service: &ListService,
    text: Option<&str>,
    travel: bool,
    output: &mut W,
) -> Result<Option<ItemKey>, CliError> {
    let Some(text) = text else {
        tracing::debug!("Ignoring add without item text");
        return Ok(None);
    };

    let key = service.add(text, category_for(travel)).await?;
    if let Some(key) = &key {
        writeln!(output, "{key}")?;
    }
    Ok(key)
}
