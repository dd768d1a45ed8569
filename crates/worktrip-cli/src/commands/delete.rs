use std::io::{self, BufRead, Write};

use worktrip_core::config::StoreConfig;
use worktrip_core::services::ListService;
use worktrip_core::store::{Confirmation, RemoveOutcome};

use crate::commands::common::{open_list, PromptConfirm};
use crate::error::CliError;

pub async fn run_delete(id: &str, yes: bool, config: &StoreConfig) -> Result<(), CliError> {
    let service = open_list(config).await?;
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    delete_item(&service, id, yes, &mut input, &mut output).await?;
    Ok(())
}

pub async fn delete_item<R: BufRead, W: Write>(
    service: &ListService,
    id: &str,
    yes: bool,
    input: &mut R,
    output: &mut W,
) -> Result<RemoveOutcome, CliError> {
    let key = service.resolve_key(id).await?;

    let outcome = if yes {
        service.remove(&key, Confirmation::Confirm).await?
    } else {
        service
            .remove(&key, PromptConfirm::new(input, output))
            .await?
    };

    match &outcome {
        RemoveOutcome::Removed(_) => writeln!(output, "{key}")?,
        RemoveOutcome::Cancelled => writeln!(output, "Cancelled")?,
    }
    Ok(outcome)
}
