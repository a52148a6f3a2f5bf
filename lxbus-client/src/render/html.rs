//! In-memory model of the widget display, rendered to HTML.

use askama::Template;
use tracing::error;

use crate::domain::{ArrivalRecord, StopCode};

use super::templates::{PreviousCodesTemplate, ResultsTableTemplate};
use super::{Renderer, UiState};

/// Renderer that keeps the widget's display regions as HTML fragments.
///
/// A host embeds the fragments into its page; tests read them back.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    state: UiState,
    rows: Vec<ArrivalRecord>,
    table_html: Option<String>,
    caption: String,
    previous_codes_html: Option<String>,
    alerts: Vec<String>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Which region of the widget is showing.
    pub fn state(&self) -> UiState {
        self.state
    }

    /// Rows currently in the results table.
    pub fn rows(&self) -> &[ArrivalRecord] {
        &self.rows
    }

    /// Results table body, or `None` when no table is shown.
    pub fn table_html(&self) -> Option<&str> {
        self.table_html.as_deref()
    }

    /// Text shown above the results (message, error or timeout notice).
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Previous-codes list, or `None` if it was never shown.
    pub fn previous_codes_html(&self) -> Option<&str> {
        self.previous_codes_html.as_deref()
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    fn clear_results(&mut self) {
        self.rows.clear();
        self.table_html = None;
        self.caption.clear();
    }
}

fn render_or_report(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        error!(error = %e, "template render failed");
        format!("Template error: {}", e)
    })
}

impl Renderer for HtmlRenderer {
    fn show_idle(&mut self) {
        self.state = UiState::Idle;
    }

    fn show_waiting(&mut self) {
        self.clear_results();
        self.state = UiState::Waiting;
    }

    fn show_results(&mut self, rows: &[ArrivalRecord], caption: &str) {
        self.table_html = Some(render_or_report(&ResultsTableTemplate { rows }));
        self.rows = rows.to_vec();
        self.caption = caption.to_string();
        self.state = UiState::ResultsShown;
    }

    fn show_error(&mut self, message: &str) {
        self.clear_results();
        self.caption = message.to_string();
        self.state = UiState::ResultsShown;
    }

    fn show_alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn show_previous_codes(&mut self, codes: &[StopCode]) {
        self.previous_codes_html = Some(render_or_report(&PreviousCodesTemplate { codes }));
    }
}
