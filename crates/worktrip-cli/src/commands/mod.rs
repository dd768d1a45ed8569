pub mod add;
pub mod common;
pub mod completions;
pub mod config;
pub mod delete;
pub mod list;
pub mod screen;
