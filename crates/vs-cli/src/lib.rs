//! Value Stream Terminal Front End
//!
//! Library half of the `value-stream` binary:
//! - [`config`]: TOML configuration with defaults
//! - [`logging`]: stderr tracing subscriber
//! - [`commands`]: interactive shell grammar
//! - [`shell`]: the edit loop over a [`vs_editor::Session`]
//!
//! # Example
//!
//! ```rust,ignore
//! use vs_cli::{AppConfig, Shell};
//!
//! let config = AppConfig::default().with_confirm_deletes(false);
//! let mut shell = Shell::new(vs_gateway::bundled_document()?, &config)?;
//! shell.run(&mut std::io::stdin().lock(), &mut std::io::stdout()).await?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod config;
pub mod logging;
pub mod shell;

pub use commands::{Command, CommandError};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use shell::{Outcome, Shell};

use anyhow::Context;
use std::path::Path;
use vs_model::Document;

/// Open the document to work on: a file if given, else the bundled one
///
/// # Errors
/// Returns error if the file cannot be read or fails import validation
pub async fn load_document(data_file: Option<&Path>) -> anyhow::Result<Document> {
    match data_file {
        Some(path) => vs_gateway::read_import(path)
            .await
            .with_context(|| format!("loading {}", path.display())),
        None => vs_gateway::bundled_document().context("loading bundled document"),
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
