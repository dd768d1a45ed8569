use worktrip_core::config::StoreConfig;

use crate::error::CliError;

pub fn run_config(config: &StoreConfig) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
