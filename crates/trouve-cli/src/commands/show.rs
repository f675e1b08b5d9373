// Rust guideline compliant 2026-02-06

//! Implementation of the `ttp show` command.
//!
//! Loads one worker through the detail screen and prints it with the
//! contact actions the record offers.

use crate::CommandContext;
use anyhow::Result;
use trouve_app::{DetailScreen, DirectoryApi};

/// Shows details of a worker by ID.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `id` - Worker identifier
/// * `name` - Name known from the listing, shown while loading
///
/// # Errors
///
/// Returns an error if the record cannot be loaded.
pub async fn execute(ctx: &CommandContext, id: String, name: Option<String>) -> Result<()> {
    let screen = load(ctx.directory()?, id, name).await?;
    if let Some(worker) = screen.worker() {
        println!("{}", ctx.formatter.format_worker(worker, &screen.actions()));
    }
    Ok(())
}

/// Loads a detail screen, turning a failed load into an error.
///
/// # Errors
///
/// Returns the detail load error.
pub(crate) async fn load<A: DirectoryApi>(
    api: A,
    id: String,
    name: Option<String>,
) -> Result<DetailScreen<A>> {
    let mut screen = DetailScreen::new(api, id, name);
    if let Some(title) = screen.title() {
        tracing::debug!(%title, "loading worker detail");
    }
    screen.load().await;
    match screen.take_error() {
        Some(error) => Err(error.into()),
        None => Ok(screen),
    }
}
