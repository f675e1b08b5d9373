// Rust guideline compliant 2026-02-06

//! Implementation of the `ttp call` and `ttp whatsapp` commands.

use super::show;
use crate::CommandContext;
use anyhow::Result;
use trouve_core::ContactAction;

/// Loads a worker and opens a contact intent for it.
///
/// The opened intent URL is printed; the CLI has no platform launcher.
///
/// # Errors
///
/// Returns an error if:
/// - The record cannot be loaded
/// - The worker does not offer the action
/// - No handler is configured for the intent scheme
pub async fn execute(ctx: &CommandContext, id: String, action: ContactAction) -> Result<()> {
    let screen = show::load(ctx.directory()?, id, None).await?;
    let handler = ctx.intent_handler();
    let url = screen.contact(action, &handler)?;
    println!("{}", ctx.formatter.format_intent(action, &url));
    Ok(())
}
