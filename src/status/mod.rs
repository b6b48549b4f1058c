//! Run-state indicator, counters and last-run time.

use crate::api::{ApiError, HarvesterApi, RunStatus};
use crate::i18n::Strings;
use crate::page::{ControlButtons, RunState, StatusBadge, StatusElements};
use chrono::{DateTime, Local, NaiveDateTime};
use std::rc::Rc;
use tracing::{debug, error, warn};

pub struct StatusView {
    api: Rc<dyn HarvesterApi>,
    elements: StatusElements,
    buttons: ControlButtons,
    strings: &'static Strings,
}

impl StatusView {
    pub fn new(
        api: Rc<dyn HarvesterApi>,
        elements: StatusElements,
        buttons: ControlButtons,
        strings: &'static Strings,
    ) -> Self {
        Self {
            api,
            elements,
            buttons,
            strings,
        }
    }

    /// Fetch `/status` and update the page. On error nothing on the page changes.
    pub async fn refresh(&self) -> Result<RunStatus, ApiError> {
        let status = match self.api.status().await {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "error updating status");
                return Err(e);
            }
        };
        debug!(
            running = status.running,
            candidates = status.candidates_found,
            transactions = status.transactions_sent,
            "status refreshed"
        );
        self.apply(&status);
        Ok(status)
    }

    fn apply(&self, status: &RunStatus) {
        let state = RunState::from(status.running);

        if let Some(el) = &self.elements.status_text {
            el.set(StatusBadge::from(state));
        }
        self.buttons.show(state);

        if let Some(el) = &self.elements.candidates_count {
            el.set(status.candidates_found.to_string());
        }
        if let Some(el) = &self.elements.transactions_count {
            el.set(status.transactions_sent.to_string());
        }

        if let (Some(el), Some(raw)) = (&self.elements.last_run, &status.last_run) {
            match format_last_run(raw, self.strings.datetime_format) {
                Some(text) => el.set(text),
                None => warn!(last_run = %raw, "unparseable last_run timestamp"),
            }
        }

        if let (Some(el), Some(dry_run)) = (&self.elements.dry_run, status.dry_run) {
            el.set(Some(dry_run));
        }
    }
}

/// Render an ISO-8601 timestamp with `pattern`.
///
/// Timestamps carrying an offset are shown in local time. Naive timestamps are
/// already local (the backend emits `datetime.now().isoformat()`).
pub fn format_last_run(raw: &str, pattern: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).format(pattern).to_string());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.format(pattern).to_string())
}
