// Rust guideline compliant 2026-02-06

//! Query construction for the directory read endpoints.

use crate::filter::{FilterState, SortCriterion};
use crate::models::Geolocation;

/// Path of the worker collection relative to the service base address.
pub const WORKERS_PATH: &str = "/api/workers/";

/// Returns the absolute listing URL for a base address.
///
/// Trailing slashes on the base are ignored.
#[must_use]
pub fn workers_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), WORKERS_PATH)
}

/// Returns the query parameters of a listing request.
///
/// # Arguments
///
/// * `state` - Current filter state
/// * `location` - Viewer position, if known
///
/// # Returns
///
/// Ordered `(name, value)` pairs. `is_active=True` is always first; the
/// distance ordering is only requested together with coordinates.
#[must_use]
pub fn listing_params(
    state: &FilterState,
    location: Option<Geolocation>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("is_active", "True".to_string())];

    if let Some(category) = state.category.as_query() {
        params.push(("category", category.to_string()));
    }

    match (state.sort, location) {
        (SortCriterion::Distance, Some(position)) => {
            params.push(("ordering", "distance".to_string()));
            params.push(("user_lat", position.latitude.to_string()));
            params.push(("user_lng", position.longitude.to_string()));
        }
        (SortCriterion::Distance, None) | (SortCriterion::None, _) => {}
        (criterion, _) => {
            if let Some(ordering) = criterion.ordering() {
                params.push(("ordering", ordering.to_string()));
            }
        }
    }

    params
}

/// Whether a listing fetch should be issued for this state.
///
/// Distance ordering waits until a location is available.
#[must_use]
pub fn should_fetch(state: &FilterState, location: Option<Geolocation>) -> bool {
    !state.sort.needs_location() || location.is_some()
}
