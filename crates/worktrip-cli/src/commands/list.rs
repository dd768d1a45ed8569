use chrono::Utc;
use worktrip_core::config::StoreConfig;

use crate::commands::common::{
    category_for, format_item_lines, item_to_list_item, open_list, ItemListItem,
};
use crate::error::CliError;

pub async fn run_list(travel: bool, as_json: bool, config: &StoreConfig) -> Result<(), CliError> {
    let service = open_list(config).await?;
    let items = service.list(category_for(travel)).await;

    if as_json {
        let json_items = items
            .iter()
            .map(|(key, item)| item_to_list_item(key, item))
            .collect::<Vec<ItemListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_item_lines(&items, Utc::now().timestamp_millis()) {
            println!("{line}");
        }
    }

    Ok(())
}
