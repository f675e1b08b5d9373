// Rust guideline compliant 2026-02-06

//! Implementation of the `ttp categories` command.

use crate::CommandContext;
use anyhow::Result;
use trouve_app::{ListScreen, NoLocation};

/// Prints the category bar built from the unfiltered listing.
///
/// # Errors
///
/// Returns an error if the listing cannot be fetched.
pub async fn execute(ctx: &CommandContext) -> Result<()> {
    let mut screen = ListScreen::new(ctx.directory()?, NoLocation);
    screen.activate().await;
    if let Some(error) = screen.take_error() {
        return Err(error.into());
    }

    println!("{}", ctx.formatter.format_categories(&screen.categories()));
    Ok(())
}
