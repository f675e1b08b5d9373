// Rust guideline compliant 2026-02-06

//! Client-side result shaping for worker listings.
//!
//! The server filters and orders listings already; this module re-applies the
//! search text, the category fallback filter, and the name/city sort so that
//! the displayed subset is correct even when the server ignores a parameter.

use crate::filter::{CategoryFilter, FilterState, SortCriterion, ALL_CATEGORIES};
use crate::models::Worker;
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Listings at or above this size are filtered on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Derives the displayed, ordered subset of a listing.
///
/// # Arguments
///
/// * `listing` - Records as returned by the listing fetch
/// * `state` - Current search text, category and sort criterion
///
/// # Returns
///
/// A new vector containing only matching records. Name and city criteria
/// are sorted with [`collate`]; distance and none keep the input order.
#[must_use]
pub fn shape(listing: &[Worker], state: &FilterState) -> Vec<Worker> {
    let needle = state.search.to_lowercase();

    let predicate = |worker: &&Worker| {
        matches_search(worker, &needle) && matches_category(worker, &state.category)
    };

    let mut shaped: Vec<Worker> = if listing.len() >= PARALLEL_THRESHOLD {
        listing.par_iter().filter(predicate).cloned().collect()
    } else {
        listing.iter().filter(predicate).cloned().collect()
    };

    match state.sort {
        SortCriterion::Name => shaped.sort_by(|a, b| collate(&a.last_name, &b.last_name)),
        SortCriterion::City => shaped.sort_by(|a, b| collate(&a.city, &b.city)),
        SortCriterion::Distance | SortCriterion::None => {}
    }

    shaped
}

fn matches_search(worker: &Worker, needle: &str) -> bool {
    needle.is_empty() || worker.search_text().to_lowercase().contains(needle)
}

fn matches_category(worker: &Worker, category: &CategoryFilter) -> bool {
    category.matches(&worker.category)
}

thread_local! {
    static COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("ar").into(), CollatorOptions::new()).ok();
}

/// Compares two labels the way the directory displays them.
///
/// Uses Unicode collation with the Arabic tailoring, so accented Latin
/// letters sort with their base letter and hamza forms of alef sort with
/// alef. The raw text breaks ties to keep the order total.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
    .then_with(|| a.cmp(b))
}

/// Builds the category bar: the "all" sentinel, then each distinct category
/// in the order it first appears in the listing.
#[must_use]
pub fn categories(listing: &[Worker]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut bar = vec![ALL_CATEGORIES.to_string()];
    for worker in listing {
        if seen.insert(worker.category.as_str()) {
            bar.push(worker.category.clone());
        }
    }
    bar
}

/// Memoizing wrapper around [`shape`].
///
/// The listing is identified by a caller-maintained revision number that
/// must change whenever the listing is replaced.
#[derive(Debug, Default)]
pub struct Shaper {
    cached: Option<(u64, FilterState, Vec<Worker>)>,
}

impl Shaper {
    /// Creates an empty shaper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shaped listing, recomputing only when the inputs changed.
    ///
    /// # Arguments
    ///
    /// * `revision` - Revision of `listing`
    /// * `listing` - Records as returned by the listing fetch
    /// * `state` - Current filter state
    pub fn shape(&mut self, revision: u64, listing: &[Worker], state: &FilterState) -> &[Worker] {
        let stale = match &self.cached {
            Some((cached_revision, cached_state, _)) => {
                *cached_revision != revision || cached_state != state
            }
            None => true,
        };

        if stale {
            self.cached = Some((revision, state.clone(), shape(listing, state)));
        }

        match &self.cached {
            Some((_, _, shaped)) => shaped.as_slice(),
            None => &[],
        }
    }

    #[cfg(test)]
    fn is_cached(&self, revision: u64, state: &FilterState) -> bool {
        matches!(&self.cached, Some((r, s, _)) if *r == revision && s == state)
    }

    #[cfg(test)]
    fn invalidate(&mut self) {
        self.cached = None;
    }
}
