// Rust guideline compliant 2026-02-09

//! Outbound intents (phone calls, messaging apps).

use crate::error::{AppError, Result};
use std::sync::Mutex;
use tracing::debug;
use trouve_core::contact::scheme_of;

/// Opens intent URLs on the host platform.
pub trait IntentHandler {
    /// Whether some installed application handles this URL.
    fn can_open(&self, url: &str) -> bool;

    /// Hands the URL to the platform.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IntentFailed`] if the URL could not be opened.
    fn open(&self, url: &str) -> Result<()>;
}

/// Handler that accepts a fixed set of URL schemes and records what it opened.
///
/// Front ends without a platform launcher print the recorded URLs instead.
#[derive(Debug, Default)]
pub struct SchemeHandler {
    schemes: Vec<String>,
    opened: Mutex<Vec<String>>,
}

impl SchemeHandler {
    /// Creates a handler for the given schemes (without `:`).
    #[must_use]
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schemes: schemes.into_iter().map(Into::into).collect(),
            opened: Mutex::new(Vec::new()),
        }
    }

    /// Returns the URLs opened so far, oldest first.
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        match self.opened.lock() {
            Ok(opened) => opened.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl IntentHandler for SchemeHandler {
    fn can_open(&self, url: &str) -> bool {
        let scheme = scheme_of(url);
        self.schemes
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(scheme))
    }

    fn open(&self, url: &str) -> Result<()> {
        if !self.can_open(url) {
            return Err(AppError::IntentFailed {
                url: url.to_string(),
                reason: format!("no handler registered for '{}'", scheme_of(url)),
            });
        }

        debug!(url, "opening intent");
        self.opened
            .lock()
            .map_err(|err| AppError::IntentFailed {
                url: url.to_string(),
                reason: err.to_string(),
            })?
            .push(url.to_string());
        Ok(())
    }
}
