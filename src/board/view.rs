// src/board/view.rs

use crate::domain::{EventRecord, FacetOption, FilterState, PageWindow};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of the most recent feed load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    /// Nothing has been fetched yet.
    Empty,
    Loaded { at: DateTime<Utc>, rows: usize },
    Failed { at: DateTime<Utc>, message: String },
}

/// One recomputation of the board for a given filter state.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub filter: FilterState,
    pub events: Vec<EventRecord>,
    pub month_options: Vec<FacetOption>,
    pub area_options: Vec<FacetOption>,
    pub pagination: Option<PageWindow>,
    pub total: usize,
    pub record_count: usize,
    pub status: LoadStatus,
}

impl BoardView {
    /// Records exist but none pass the filters.
    pub fn is_no_results(&self) -> bool {
        self.record_count > 0 && self.total == 0
    }

    /// There is nothing on the board at all, filtered or not.
    pub fn is_no_data(&self) -> bool {
        self.record_count == 0
    }
}
