// Rust guideline compliant 2026-02-09

//! Application services for the TrouveTonPro worker directory.
//!
//! This crate holds the directory HTTP client, the list and detail screen
//! controllers, and the platform collaborators (location, intents) that the
//! controllers depend on. Front ends render the controller state.

pub mod client;
pub mod detail_screen;
pub mod error;
pub mod intent;
pub mod list_screen;
pub mod location;
pub mod response;

pub use client::{DirectoryApi, HttpDirectory};
pub use detail_screen::{DetailScreen, DetailState};
pub use error::{AppError, ErrorCode, Result};
pub use intent::{IntentHandler, SchemeHandler};
pub use list_screen::{ListScreen, LoadState};
pub use location::{FixedLocation, LocationProvider, NoLocation, Permission};
pub use response::{ErrorEnvelope, SuccessEnvelope};
