// src/domain/filter.rs

use crate::domain::event::EventRecord;
use serde::Serialize;

/// The user's current narrowing of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search_text: String,
    pub selected_month: Option<String>,
    pub selected_area: Option<String>,
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_month: None,
            selected_area: None,
            current_page: 1,
        }
    }
}

/// A user interaction that changes the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    Search(String),
    Month(Option<String>),
    Area(Option<String>),
    Page(usize),
}

impl FilterState {
    pub fn new(
        search_text: impl Into<String>,
        selected_month: Option<String>,
        selected_area: Option<String>,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            selected_month: non_empty(selected_month),
            selected_area: non_empty(selected_area),
            current_page: 1,
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.current_page = 1;
    }

    /// Selecting a month rebuilds the area options, so any area selection
    /// is dropped along with the page.
    pub fn select_month(&mut self, month: Option<String>) {
        self.selected_month = non_empty(month);
        self.selected_area = None;
        self.current_page = 1;
    }

    pub fn select_area(&mut self, area: Option<String>) {
        self.selected_area = non_empty(area);
        self.current_page = 1;
    }

    /// Moves to `page` if it is a real page other than the current one.
    /// Returns whether the state changed.
    pub fn request_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.selected_month.is_none() && self.selected_area.is_none()
    }

    /// Whether `record` passes the search, month and area predicates.
    pub fn matches(&self, record: &EventRecord) -> bool {
        self.matches_search(record) && self.matches_month(record) && self.matches_area(record)
    }

    fn matches_search(&self, record: &EventRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();

        [&record.title, &record.location, &record.area]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_month(&self, record: &EventRecord) -> bool {
        match &self.selected_month {
            Some(month) => record.month() == Some(month.as_str()),
            None => true,
        }
    }

    fn matches_area(&self, record: &EventRecord) -> bool {
        match &self.selected_area {
            Some(area) => record.area == *area,
            None => true,
        }
    }
}

/// The records passing `state`, in their original order.
pub fn filter_events<'a>(records: &'a [EventRecord], state: &FilterState) -> Vec<&'a EventRecord> {
    records.iter().filter(|record| state.matches(record)).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
