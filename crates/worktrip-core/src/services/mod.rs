//! Shared services used across clients.

mod list;

pub use list::ListService;
