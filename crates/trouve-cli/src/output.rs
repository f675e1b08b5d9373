// Rust guideline compliant 2026-02-06

//! Output formatting module for the TrouveTonPro CLI.
//!
//! This module provides functionality for formatting directory records
//! in various output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use serde_json::json;
use std::io::Write;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};
use tabled::{builder::Builder, settings::Style};
use trouve_app::{AppError, ErrorEnvelope, SuccessEnvelope};
use trouve_core::{ContactAction, Worker};

/// Label column width of the detail view.
const DETAIL_LABEL_WIDTH: usize = 10;

/// Output formatter trait.
///
/// Defines the interface for formatting directory data in different output formats.
pub trait OutputFormatter {
    /// Formats a worker detail record.
    ///
    /// # Arguments
    /// * `worker` - The loaded record
    /// * `actions` - Contact actions offered for the record
    ///
    /// # Returns
    /// A formatted string representation of the record
    fn format_worker(&self, worker: &Worker, actions: &[ContactAction]) -> String;

    /// Formats the displayed listing.
    ///
    /// # Arguments
    /// * `workers` - The records to format, in display order
    ///
    /// # Returns
    /// A formatted string representation of the listing
    fn format_list(&self, workers: &[Worker]) -> String;

    /// Formats the category bar entries.
    fn format_categories(&self, categories: &[String]) -> String;

    /// Formats the outcome of a contact action.
    fn format_intent(&self, action: ContactAction, url: &str) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;

    /// Formats an application error. Defaults to its message.
    fn format_app_error(&self, error: &AppError) -> String {
        self.format_error(&error.to_string())
    }

    /// Whether output is meant for machines rather than a terminal.
    fn is_machine_readable(&self) -> bool {
        false
    }
}

/// JSON output formatter.
///
/// Wraps payloads in the standard response envelopes.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: serde::Serialize>(payload: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(payload))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_worker(&self, worker: &Worker, actions: &[ContactAction]) -> String {
        Self::render(json!({
            "worker": worker,
            "actions": actions,
        }))
    }

    fn format_list(&self, workers: &[Worker]) -> String {
        Self::render(json!({
            "workers": workers,
            "total": workers.len(),
        }))
    }

    fn format_categories(&self, categories: &[String]) -> String {
        Self::render(json!({ "categories": categories }))
    }

    fn format_intent(&self, action: ContactAction, url: &str) -> String {
        Self::render(json!({ "action": action, "url": url }))
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "status": "error", "message": error }).to_string()
    }

    fn format_app_error(&self, error: &AppError) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| self.format_error(&error.to_string()))
    }

    fn is_machine_readable(&self) -> bool {
        true
    }
}

/// Table output formatter.
///
/// Formats records as human-readable tables and labelled fields.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Wraps `text` in ANSI escapes for `spec` when color is enabled.
    fn paint(&self, text: &str, spec: &ColorSpec) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let mut out = Ansi::new(Vec::new());
        let written = out
            .set_color(spec)
            .and_then(|()| out.write_all(text.as_bytes()))
            .and_then(|()| out.reset());
        match written {
            Ok(()) => String::from_utf8_lossy(&out.into_inner()).into_owned(),
            Err(_) => text.to_string(),
        }
    }
}

fn field(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!(
        "{:<width$} {}\n",
        format!("{label}:"),
        value,
        width = DETAIL_LABEL_WIDTH
    ));
}

fn category_label(worker: &Worker) -> String {
    match &worker.sous_category {
        Some(sub) if !sub.trim().is_empty() => format!("{} / {}", worker.category, sub),
        _ => worker.category.clone(),
    }
}

fn action_labels(actions: &[ContactAction]) -> String {
    actions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl OutputFormatter for TableFormatter {
    fn format_worker(&self, worker: &Worker, actions: &[ContactAction]) -> String {
        let mut output = String::new();

        field(&mut output, "ID", &worker.id);
        field(
            &mut output,
            "Name",
            &self.paint(&worker.full_name(), ColorSpec::new().set_bold(true)),
        );
        field(&mut output, "Category", &category_label(worker));
        field(&mut output, "City", &worker.city);
        field(&mut output, "Rating", &format!("{:.1}", worker.rating));
        if let Some(distance) = worker.distance_label() {
            field(&mut output, "Distance", &distance);
        }
        if !worker.phone.is_empty() {
            field(&mut output, "Phone", &worker.phone);
        }
        if let Some(number) = &worker.whatsapp_number {
            field(&mut output, "WhatsApp", number);
        }
        if let Some(email) = &worker.email {
            field(&mut output, "Email", email);
        }
        if !worker.bio.is_empty() {
            field(
                &mut output,
                "Bio",
                &wrap_text(&worker.bio, DETAIL_LABEL_WIDTH + 1),
            );
        }
        if !actions.is_empty() {
            field(&mut output, "Contact", &action_labels(actions));
        }

        output
    }

    fn format_list(&self, workers: &[Worker]) -> String {
        if workers.is_empty() {
            return "No workers found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Category", "City", "Rating", "Distance"]);

        for worker in workers {
            builder.push_record(vec![
                worker.id.clone(),
                worker.full_name(),
                worker.category.clone(),
                worker.city.clone(),
                format!("{:.1}", worker.rating),
                worker.distance_label().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_categories(&self, categories: &[String]) -> String {
        categories
            .iter()
            .map(|category| format!("  {category}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_intent(&self, action: ContactAction, url: &str) -> String {
        format!("Opening {action}: {url}")
    }

    fn format_error(&self, error: &str) -> String {
        let prefix = self.paint(
            "Error:",
            ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true),
        );
        format!("{prefix} {error}")
    }
}

/// Plain text output formatter.
///
/// Formats records as tab-separated lines without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_worker(&self, worker: &Worker, actions: &[ContactAction]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", worker.id));
        output.push_str(&format!("{}\n", worker.full_name()));
        output.push_str(&format!("{}\n", category_label(worker)));
        output.push_str(&format!("{}\n", worker.city));
        output.push_str(&format!("{:.1}\n", worker.rating));

        if !worker.bio.is_empty() {
            output.push_str(&format!("{}\n", worker.bio));
        }
        if !actions.is_empty() {
            output.push_str(&format!("{}\n", action_labels(actions)));
        }

        output
    }

    fn format_list(&self, workers: &[Worker]) -> String {
        if workers.is_empty() {
            return "No workers found.".to_string();
        }

        let mut output = String::new();
        for worker in workers {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                worker.id,
                worker.full_name(),
                worker.category,
                worker.city
            ));
        }
        output
    }

    fn format_categories(&self, categories: &[String]) -> String {
        categories.join("\n")
    }

    fn format_intent(&self, _action: ContactAction, url: &str) -> String {
        url.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
