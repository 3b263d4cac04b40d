// src/board/store.rs

use crate::board::view::{BoardView, LoadStatus};
use crate::domain::{
    area_options, filter_events, month_options, normalize_rows, paginate, total_pages,
    EventRecord, FacetOption, FilterEvent, FilterState, PAGE_SIZE,
};
use crate::errors::ServerError;
use crate::feed::{FeedError, Row, RowSource};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{error, info, warn};

/// Records from one load, with the month facet that only changes when they do.
#[derive(Debug, Default)]
struct Snapshot {
    records: Vec<EventRecord>,
    month_options: Vec<FacetOption>,
}

/// Owns the event set and answers every filter, facet and page question
/// about it. Shared across request handlers.
pub struct EventBoard {
    snapshot: RwLock<Arc<Snapshot>>,
    status: RwLock<LoadStatus>,
    refreshing: AtomicBool,
}

impl Default for EventBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBoard {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
            status: RwLock::new(LoadStatus::Empty),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Replaces the whole record set with the normalized `rows`.
    pub fn replace_rows(&self, rows: &[Row]) -> Result<usize, ServerError> {
        let records = normalize_rows(rows);
        let count = records.len();
        let month_options = month_options(&records);

        let mut slot = self
            .snapshot
            .write()
            .map_err(|_| ServerError::InternalError)?;
        *slot = Arc::new(Snapshot {
            records,
            month_options,
        });
        drop(slot);

        self.set_status(LoadStatus::Loaded {
            at: Utc::now(),
            rows: count,
        })?;
        Ok(count)
    }

    /// Pulls fresh rows from `source` and swaps them in. On failure the
    /// previous records stay and the status records the error.
    pub fn refresh(&self, source: &dyn RowSource) -> Result<usize, ServerError> {
        if self.refreshing.swap(true, Ordering::AcqRel) {
            warn!("refresh requested while another is running");
            return Err(FeedError::RefreshInProgress.into());
        }
        let _guard = RefreshGuard(&self.refreshing);

        match source.fetch_rows() {
            Ok(rows) => {
                let count = self.replace_rows(&rows)?;
                info!(records = count, "event board refreshed");
                Ok(count)
            }
            Err(e) => {
                let kept = self.record_count()?;
                error!(error = %e, kept, "event board refresh failed");
                self.set_status(LoadStatus::Failed {
                    at: Utc::now(),
                    message: e.to_string(),
                })?;
                Err(e.into())
            }
        }
    }

    pub fn status(&self) -> Result<LoadStatus, ServerError> {
        self.status
            .read()
            .map(|s| s.clone())
            .map_err(|_| ServerError::InternalError)
    }

    pub fn record_count(&self) -> Result<usize, ServerError> {
        Ok(self.snapshot()?.records.len())
    }

    /// Applies a user event to `state`. Page requests outside the current
    /// result set are ignored, as is a request for the page already shown.
    pub fn apply(&self, state: &mut FilterState, event: FilterEvent) -> Result<(), ServerError> {
        match event {
            FilterEvent::Search(text) => state.set_search(text),
            FilterEvent::Month(month) => state.select_month(month),
            FilterEvent::Area(area) => state.select_area(area),
            FilterEvent::Page(page) if page == state.current_page => {}
            FilterEvent::Page(page) => {
                let snapshot = self.snapshot()?;
                let total = total_pages(filter_events(&snapshot.records, state).len(), PAGE_SIZE);
                if !state.request_page(page, total) {
                    warn!(page, total, "ignoring out-of-range page request");
                }
            }
        }
        Ok(())
    }

    /// Every record passing `state`, unpaginated.
    pub fn filtered(&self, state: &FilterState) -> Result<Vec<EventRecord>, ServerError> {
        let snapshot = self.snapshot()?;
        Ok(filter_events(&snapshot.records, state)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn view(&self, state: &FilterState) -> Result<BoardView, ServerError> {
        let snapshot = self.snapshot()?;
        let status = self.status()?;

        let filtered = filter_events(&snapshot.records, state);
        let total = filtered.len();

        let mut applied = state.clone();
        let pages = total_pages(total, PAGE_SIZE);
        if applied.current_page == 0 || applied.current_page > pages.max(1) {
            warn!(page = applied.current_page, pages, "page out of range, showing first page");
            applied.current_page = 1;
        }

        let pagination = paginate(total, PAGE_SIZE, applied.current_page);
        let events = match &pagination {
            Some(window) => filtered[window.range()].iter().map(|e| (*e).clone()).collect(),
            None => Vec::new(),
        };

        Ok(BoardView {
            events,
            month_options: snapshot.month_options.clone(),
            area_options: area_options(&snapshot.records, applied.selected_month.as_deref()),
            pagination,
            total,
            record_count: snapshot.records.len(),
            status,
            filter: applied,
        })
    }

    fn snapshot(&self) -> Result<Arc<Snapshot>, ServerError> {
        self.snapshot
            .read()
            .map(|s| Arc::clone(&s))
            .map_err(|_| ServerError::InternalError)
    }

    fn set_status(&self, status: LoadStatus) -> Result<(), ServerError> {
        let mut slot = self.status.write().map_err(|_| ServerError::InternalError)?;
        *slot = status;
        Ok(())
    }
}

struct RefreshGuard<'a>(&'a AtomicBool);

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
