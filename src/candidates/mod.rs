//! Candidates table.

use crate::api::{ApiError, Candidate, HarvesterApi};
use crate::i18n::Strings;
use crate::page::{Handle, TableRow, CANDIDATE_COLUMNS};
use std::rc::Rc;
use tracing::{debug, error};

pub struct CandidateListView {
    api: Rc<dyn HarvesterApi>,
    tbody: Option<Handle<Vec<TableRow>>>,
    strings: &'static Strings,
}

impl CandidateListView {
    pub fn new(
        api: Rc<dyn HarvesterApi>,
        tbody: Option<Handle<Vec<TableRow>>>,
        strings: &'static Strings,
    ) -> Self {
        Self {
            api,
            tbody,
            strings,
        }
    }

    /// Fetch `/candidates` and rebuild the table body. Returns the number of
    /// candidate rows rendered.
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        let Some(tbody) = &self.tbody else {
            debug!("no candidates table on page, skipping refresh");
            return Ok(0);
        };

        let resp = match self.api.candidates().await {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "error updating candidates");
                return Err(e);
            }
        };

        let candidates = resp.candidates.unwrap_or_default();
        let count = candidates.len();
        tbody.set(build_rows(&candidates, self.strings));
        debug!(count = count, "candidates refreshed");
        Ok(count)
    }
}

/// One row per candidate in backend order, or a single placeholder row.
pub fn build_rows(candidates: &[Candidate], strings: &Strings) -> Vec<TableRow> {
    if candidates.is_empty() {
        return vec![TableRow::Placeholder {
            colspan: CANDIDATE_COLUMNS,
            message: strings.no_candidates.to_string(),
        }];
    }
    candidates
        .iter()
        .map(|c| TableRow::Candidate {
            pair: c.pair.clone(),
            token: c.token.clone(),
            surplus: c.surplus.to_string(),
        })
        .collect()
}
