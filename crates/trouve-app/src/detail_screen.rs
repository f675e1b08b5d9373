// Rust guideline compliant 2026-02-09

//! Controller for the worker detail screen.

use crate::client::DirectoryApi;
use crate::error::{AppError, Result};
use crate::intent::IntentHandler;
use tracing::info;
use trouve_core::{offered_actions, ContactAction, Worker};

/// Load state of a detail record.
#[derive(Debug)]
pub enum DetailState {
    /// The record has not been loaded yet.
    Loading,
    /// The record is available.
    Loaded(Worker),
    /// Loading failed. Detail errors offer no retry.
    Failed(AppError),
    /// The load error was dismissed; nothing is pending.
    Idle,
}

/// Detail screen controller for one worker identifier.
pub struct DetailScreen<A> {
    api: A,
    id: String,
    nav_title: Option<String>,
    state: DetailState,
}

impl<A: DirectoryApi> DetailScreen<A> {
    /// Creates a controller for `id`.
    ///
    /// # Arguments
    ///
    /// * `api` - Directory access
    /// * `id` - Worker identifier
    /// * `nav_title` - Name shown while the record loads
    pub fn new(api: A, id: impl Into<String>, nav_title: Option<String>) -> Self {
        Self {
            api,
            id: id.into(),
            nav_title,
            state: DetailState::Loading,
        }
    }

    /// Fetches the record.
    pub async fn load(&mut self) {
        self.state = match self.api.fetch_worker(&self.id).await {
            Ok(worker) => {
                info!(id = %self.id, "worker detail loaded");
                DetailState::Loaded(worker)
            }
            Err(err) => DetailState::Failed(err),
        };
    }

    /// Returns the screen title: the loaded name, else the navigation name.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        match &self.state {
            DetailState::Loaded(worker) => Some(worker.full_name()),
            _ => self.nav_title.clone(),
        }
    }

    /// Returns the load state.
    #[must_use]
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Returns the loaded record.
    #[must_use]
    pub fn worker(&self) -> Option<&Worker> {
        match &self.state {
            DetailState::Loaded(worker) => Some(worker),
            _ => None,
        }
    }

    /// Returns the load error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&AppError> {
        match &self.state {
            DetailState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Takes the load error, leaving the screen `Idle`.
    pub fn take_error(&mut self) -> Option<AppError> {
        match std::mem::replace(&mut self.state, DetailState::Idle) {
            DetailState::Failed(err) => Some(err),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Returns the contact actions to offer. Empty until the record is loaded.
    #[must_use]
    pub fn actions(&self) -> Vec<ContactAction> {
        self.worker().map(offered_actions).unwrap_or_default()
    }

    /// Performs a contact action through the platform intent handler.
    ///
    /// WhatsApp is checked with [`IntentHandler::can_open`] first; calls are
    /// opened directly.
    ///
    /// # Returns
    ///
    /// The intent URL that was opened.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record is not loaded
    /// - The action is not offered for this worker
    /// - No messaging application is installed
    /// - The handler fails to open the URL
    pub fn contact<H: IntentHandler>(&self, action: ContactAction, handler: &H) -> Result<String> {
        let worker = self
            .worker()
            .ok_or_else(|| AppError::InvalidInput(format!("Worker {} is not loaded", self.id)))?;
        let url = action
            .intent_url(worker)
            .ok_or(AppError::ActionUnavailable(action))?;

        if action == ContactAction::WhatsApp && !handler.can_open(&url) {
            return Err(AppError::MissingMessagingHandler {
                first_name: worker.first_name.clone(),
            });
        }

        handler.open(&url)?;
        info!(id = %self.id, %action, "contact intent opened");
        Ok(url)
    }
}
