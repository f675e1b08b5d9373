// Rust guideline compliant 2026-02-06

//! Contact intents exposed by a worker detail record.

use crate::models::Worker;
use serde::Serialize;
use std::fmt;

/// A contact action the presentation layer may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactAction {
    /// Phone call through the `tel:` scheme.
    Call,
    /// Chat through the `whatsapp:` scheme.
    WhatsApp,
}

impl ContactAction {
    /// URL scheme handling this action.
    #[must_use]
    pub fn scheme(self) -> &'static str {
        match self {
            ContactAction::Call => "tel",
            ContactAction::WhatsApp => "whatsapp",
        }
    }

    /// Builds the intent URL for a worker, if the worker supports the action.
    #[must_use]
    pub fn intent_url(self, worker: &Worker) -> Option<String> {
        match self {
            ContactAction::Call if !worker.phone.trim().is_empty() => Some(call_url(&worker.phone)),
            ContactAction::Call => None,
            ContactAction::WhatsApp => worker.whatsapp_number.as_deref().map(whatsapp_url),
        }
    }
}

impl fmt::Display for ContactAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactAction::Call => f.write_str("call"),
            ContactAction::WhatsApp => f.write_str("whatsapp"),
        }
    }
}

/// Returns `tel:{phone}`.
#[must_use]
pub fn call_url(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Returns `whatsapp://send?phone={number}`.
#[must_use]
pub fn whatsapp_url(number: &str) -> String {
    format!("whatsapp://send?phone={}", number)
}

/// Lists the actions offered for a worker, call first.
///
/// WhatsApp is only offered when the record carries a WhatsApp number.
#[must_use]
pub fn offered_actions(worker: &Worker) -> Vec<ContactAction> {
    [ContactAction::Call, ContactAction::WhatsApp]
        .into_iter()
        .filter(|action| action.intent_url(worker).is_some())
        .collect()
}

/// Returns the scheme part of an intent URL.
#[must_use]
pub fn scheme_of(url: &str) -> &str {
    url.split_once(':').map_or(url, |(scheme, _)| scheme)
}
