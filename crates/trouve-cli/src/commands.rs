// Rust guideline compliant 2026-02-06

//! Command implementations for the TrouveTonPro CLI.

pub mod categories;
pub mod contact;
pub mod list;
pub mod show;

use crate::OutputFormatter;
use anyhow::Result;
use trouve_app::{HttpDirectory, SchemeHandler};
use trouve_core::Config;

/// Shared state handed to every command.
pub struct CommandContext {
    /// Effective configuration after file, environment and flag overrides.
    pub config: Config,
    /// Formatter selected by `--format`/`--json` or the configuration.
    pub formatter: Box<dyn OutputFormatter>,
}

impl CommandContext {
    /// Creates a context.
    pub fn new(config: Config, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { config, formatter }
    }

    /// Builds the directory client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured address or timeout is invalid.
    pub fn directory(&self) -> Result<HttpDirectory> {
        Ok(HttpDirectory::from_config(&self.config)?)
    }

    /// Builds the intent handler for the configured URL schemes.
    pub fn intent_handler(&self) -> SchemeHandler {
        SchemeHandler::new(self.config.intent_schemes.iter().cloned())
    }
}
