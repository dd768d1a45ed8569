use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] worktrip_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("{0} Fix or remove the storage file before changing the list.")]
    LoadFailed(String),
    #[error("Item number {0} is not on the screen")]
    NoSuchRow(usize),
}
