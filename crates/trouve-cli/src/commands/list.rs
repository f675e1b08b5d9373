// Rust guideline compliant 2026-02-06

//! Implementation of the `ttp list` command.
//!
//! Builds the filter state from the options and drives a listing screen
//! through one activation, so the directory sees a single request.

use crate::CommandContext;
use anyhow::Result;
use trouve_app::{AppError, DirectoryApi, FixedLocation, ListScreen, LocationProvider, NoLocation};
use trouve_core::{CategoryFilter, FilterState, Geolocation, SortCriterion};

/// Options of `ttp list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Local search text.
    pub search: Option<String>,
    /// Category bar selection; `"all"` clears it.
    pub category: Option<String>,
    /// Sort criterion.
    pub sort: Option<SortCriterion>,
    /// Viewer latitude.
    pub lat: Option<f64>,
    /// Viewer longitude.
    pub lng: Option<f64>,
}

impl ListOptions {
    /// Returns the viewer position given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if only one coordinate is given or a value is out of range.
    pub fn position(&self) -> Result<Option<Geolocation>> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Ok(Some(Geolocation::new(lat, lng)?)),
            (None, None) => Ok(None),
            _ => anyhow::bail!("--lat and --lng must be given together"),
        }
    }

    /// Returns the filter state the listing is fetched and shaped with.
    #[must_use]
    pub fn filter(&self) -> FilterState {
        FilterState {
            search: self.search.clone().unwrap_or_default(),
            category: self
                .category
                .as_deref()
                .map(CategoryFilter::from_label)
                .unwrap_or_default(),
            sort: self.sort.unwrap_or_default(),
        }
    }
}

/// Lists workers.
///
/// # Errors
///
/// Returns an error if:
/// - The options are invalid
/// - Distance sorting is requested without a position
/// - The listing cannot be fetched
pub async fn execute(ctx: &CommandContext, options: ListOptions) -> Result<()> {
    let directory = ctx.directory()?;
    match options.position()? {
        Some(position) => run(ctx, directory, FixedLocation(position), &options).await,
        None => run(ctx, directory, NoLocation, &options).await,
    }
}

async fn run<A, L>(ctx: &CommandContext, api: A, locator: L, options: &ListOptions) -> Result<()>
where
    A: DirectoryApi,
    L: LocationProvider,
{
    let filter = options.filter();
    let mut screen = ListScreen::with_filter(api, locator, filter.clone());
    screen.activate().await;

    if filter.sort.needs_location() && !screen.distance_sort_available() {
        let message = match screen.location_error() {
            Some(reason) => format!("Nearest sort needs the current location ({reason})"),
            None => "Nearest sort needs the current location".to_string(),
        };
        return Err(AppError::InvalidInput(message).into());
    }

    if let Some(error) = screen.take_error() {
        return Err(error.into());
    }

    println!("{}", ctx.formatter.format_list(screen.visible()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_requires_both_coordinates() {
        let options = ListOptions {
            lat: Some(33.5),
            ..ListOptions::default()
        };
        assert!(options.position().is_err());

        let options = ListOptions {
            lat: Some(33.5),
            lng: Some(-7.6),
            ..ListOptions::default()
        };
        assert_eq!(
            options.position().unwrap(),
            Some(Geolocation::new(33.5, -7.6).unwrap())
        );
        assert_eq!(ListOptions::default().position().unwrap(), None);
    }

    #[test]
    fn test_filter_collects_options() {
        let options = ListOptions {
            search: Some("casa".to_string()),
            category: Some("Plombier".to_string()),
            sort: Some(SortCriterion::Name),
            ..ListOptions::default()
        };
        assert_eq!(
            options.filter(),
            FilterState {
                search: "casa".to_string(),
                category: CategoryFilter::Only("Plombier".to_string()),
                sort: SortCriterion::Name,
            }
        );
        assert_eq!(
            ListOptions {
                category: Some("all".to_string()),
                ..ListOptions::default()
            }
            .filter(),
            FilterState::default()
        );
    }

    #[test]
    fn test_position_rejects_out_of_range() {
        let options = ListOptions {
            lat: Some(120.0),
            lng: Some(0.0),
            ..ListOptions::default()
        };
        assert!(options.position().is_err());
    }
}
