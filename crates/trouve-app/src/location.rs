// Rust guideline compliant 2026-02-09

//! Viewer geolocation collaborators.

use crate::error::{AppError, Result};
use std::future::Future;
use trouve_core::Geolocation;

/// Outcome of a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Access granted.
    Granted,
    /// Access refused.
    Denied,
}

/// Source of the viewer's current position.
pub trait LocationProvider {
    /// Requests foreground location permission.
    fn request_permission(&self) -> impl Future<Output = Permission> + Send;

    /// Reads a single current position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LocationUnavailable`] if no reading can be taken.
    fn current_position(&self) -> impl Future<Output = Result<Geolocation>> + Send;
}

/// Provider returning a position supplied up front, e.g. from `--lat/--lng`.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Geolocation);

impl LocationProvider for FixedLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn current_position(&self) -> Result<Geolocation> {
        Ok(self.0)
    }
}

/// Provider for environments without location access; permission is always refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    async fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    async fn current_position(&self) -> Result<Geolocation> {
        Err(AppError::LocationUnavailable(
            "no location source configured".to_string(),
        ))
    }
}
