//! CLI, content loading, output rendering, actions
//!
//! This crate provides the `clubevents` command-line interface.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;

pub use cli::Cli;
pub use content::Content;
pub use error::{ClientError, ClientResult};
