// Rust guideline compliant 2026-02-06

//! TrouveTonPro Core Library
//!
//! This crate provides the network-free parts of the worker directory client:
//! - Data models (Worker, Geolocation)
//! - Filter/sort state and the client-side result shaper
//! - Query construction for the directory read endpoints
//! - Contact intent URLs
//! - Configuration and error types

pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod shaper;

pub use config::{Config, OutputFormat};
pub use contact::{offered_actions, ContactAction};
pub use error::{Error, Result};
pub use filter::{CategoryFilter, FilterState, SortCriterion, ALL_CATEGORIES};
pub use models::{Geolocation, Worker};
pub use query::{listing_params, should_fetch, workers_url};
pub use shaper::{categories, collate, shape, Shaper};
