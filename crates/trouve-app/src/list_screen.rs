// Rust guideline compliant 2026-02-09

//! Controller for the worker listing screen.
//!
//! The controller owns the fetched listing, the local filter/sort state and
//! the viewer position. Every event that changes what the server should
//! return (activation, category, sort, location) triggers a refetch; search
//! text is applied locally only.

use crate::client::DirectoryApi;
use crate::error::{AppError, Result};
use crate::location::{LocationProvider, Permission};
use tracing::{debug, info, warn};
use trouve_core::{
    categories, should_fetch, CategoryFilter, FilterState, Geolocation, Shaper, SortCriterion,
    Worker,
};

/// Load state of the listing.
#[derive(Debug)]
pub enum LoadState {
    /// A fetch is pending or has not been issued yet.
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; the previous listing is kept.
    Failed(AppError),
    /// No fetch is pending and the last error has been dismissed.
    Idle,
}

/// Listing screen controller.
pub struct ListScreen<A, L> {
    api: A,
    locator: L,
    filter: FilterState,
    workers: Vec<Worker>,
    revision: u64,
    state: LoadState,
    location: Option<Geolocation>,
    location_error: Option<AppError>,
    location_requested: bool,
    shaper: Shaper,
}

impl<A: DirectoryApi, L: LocationProvider> ListScreen<A, L> {
    /// Creates a controller with default filter state and no listing.
    pub fn new(api: A, locator: L) -> Self {
        Self::with_filter(api, locator, FilterState::default())
    }

    /// Creates a controller whose first fetch uses `filter`.
    ///
    /// Nothing is fetched until [`ListScreen::activate`]. A distance sort in
    /// `filter` is only requested once a position is known.
    pub fn with_filter(api: A, locator: L, filter: FilterState) -> Self {
        Self {
            api,
            locator,
            filter,
            workers: Vec::new(),
            revision: 0,
            state: LoadState::Loading,
            location: None,
            location_error: None,
            location_requested: false,
            shaper: Shaper::new(),
        }
    }

    /// Handles the screen becoming visible.
    ///
    /// The first activation requests the viewer position once; every
    /// activation refetches the listing.
    pub async fn activate(&mut self) {
        if !self.location_requested {
            self.location_requested = true;
            self.locate().await;
        }
        self.refresh().await;
    }

    /// Requests location permission and a single position reading.
    ///
    /// Failures are recorded in [`ListScreen::location_error`] and only
    /// disable distance sorting.
    pub async fn locate(&mut self) {
        if self.locator.request_permission().await == Permission::Denied {
            debug!("location permission denied");
            self.location_error = Some(AppError::LocationPermissionDenied);
            return;
        }

        match self.locator.current_position().await {
            Ok(position) => {
                self.location = Some(position);
                self.location_error = None;
            }
            Err(err) => {
                warn!(error = %err, "location unavailable");
                self.location_error = Some(match err {
                    AppError::LocationUnavailable(_) | AppError::LocationPermissionDenied => err,
                    other => AppError::LocationUnavailable(other.to_string()),
                });
            }
        }
    }

    /// Fetches the listing for the current state.
    ///
    /// Skipped while distance sorting waits for a position.
    pub async fn refresh(&mut self) {
        if !should_fetch(&self.filter, self.location) {
            debug!("distance sort selected without a location, fetch skipped");
            return;
        }

        self.state = LoadState::Loading;
        match self.api.fetch_listing(&self.filter, self.location).await {
            Ok(workers) => {
                info!(count = workers.len(), "listing replaced");
                self.workers = workers;
                self.revision = self.revision.wrapping_add(1);
                self.state = LoadState::Ready;
            }
            Err(err) => {
                warn!(error = %err, "listing fetch failed");
                self.state = LoadState::Failed(err);
            }
        }
    }

    /// Manual retry after a failed fetch.
    pub async fn retry(&mut self) {
        self.refresh().await;
    }

    /// Updates the search text. No request is issued.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    /// Selects a category from the category bar and refetches.
    ///
    /// The search text is cleared, as on the category bar of the app.
    pub async fn select_category(&mut self, label: &str) {
        self.filter.category = CategoryFilter::from_label(label);
        self.filter.search.clear();
        self.refresh().await;
    }

    /// Changes the sort criterion and refetches.
    ///
    /// # Errors
    ///
    /// Returns an error if distance sorting is requested without a position.
    pub async fn set_sort(&mut self, sort: SortCriterion) -> Result<()> {
        if sort.needs_location() && !self.distance_sort_available() {
            return Err(AppError::InvalidInput(
                "Nearest sort needs the current location".to_string(),
            ));
        }
        self.filter.sort = sort;
        self.refresh().await;
        Ok(())
    }

    /// Replaces the viewer position and refetches.
    pub async fn set_location(&mut self, location: Option<Geolocation>) {
        self.location = location;
        if location.is_some() {
            self.location_error = None;
        }
        self.refresh().await;
    }

    /// Returns the displayed records for the current state.
    pub fn visible(&mut self) -> &[Worker] {
        self.shaper.shape(self.revision, &self.workers, &self.filter)
    }

    /// Returns the category bar entries, `"all"` first.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        categories(&self.workers)
    }

    /// Whether the nearest-first option should be offered.
    #[must_use]
    pub fn distance_sort_available(&self) -> bool {
        self.location.is_some()
    }

    /// Returns the current filter state.
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Returns the load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether a fetch is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Returns the error of the last fetch, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&AppError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Takes the error of the last fetch, leaving the screen `Idle`.
    pub fn take_error(&mut self) -> Option<AppError> {
        match std::mem::replace(&mut self.state, LoadState::Idle) {
            LoadState::Failed(err) => Some(err),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Returns the non-fatal location error, if any.
    #[must_use]
    pub fn location_error(&self) -> Option<&AppError> {
        self.location_error.as_ref()
    }

    /// Returns the viewer position, if known.
    #[must_use]
    pub fn location(&self) -> Option<Geolocation> {
        self.location
    }

    /// Returns the full listing as fetched.
    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }
}
