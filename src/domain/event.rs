// src/domain/event.rs

use crate::feed::models::{Cell, Row};
use serde::Serialize;

/// Placeholder for any missing text field.
pub const MISSING: &str = "-";
/// Placeholder for a missing event link.
pub const MISSING_LINK: &str = "#";

// Column positions in the source sheet.
const COL_DATE: usize = 0;
const COL_TIME: usize = 1;
const COL_LOCATION: usize = 2;
const COL_AREA: usize = 3;
const COL_TITLE: usize = 4;
const COL_LAST_UPDATE: usize = 5;
const COL_LINK: usize = 6;

/// One event as shown on the board, normalized from a sheet row.
///
/// Every text field is populated; gaps in the sheet are filled with
/// [`MISSING`] (or [`MISSING_LINK`] for the link). `month` is derived from
/// `date` at construction and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub date: String,
    pub time: String,
    pub location: String,
    pub area: String,
    pub title: String,
    pub last_update: String,
    pub link: String,
    month: Option<String>,
}

impl EventRecord {
    /// Builds a record from a raw sheet row. Never fails.
    ///
    /// Date-like columns (date, time, last update) read the cell's formatted
    /// text; name-like columns (location, area, title, link) read the raw
    /// value. Either falls back to the other form before the sentinel.
    pub fn from_row(row: &Row) -> Self {
        let date = text_or(row.cell(COL_DATE), Cell::display_text, MISSING);
        let month = extract_month(&date);

        EventRecord {
            time: text_or(row.cell(COL_TIME), Cell::display_text, MISSING),
            location: text_or(row.cell(COL_LOCATION), Cell::value_text, MISSING),
            area: text_or(row.cell(COL_AREA), Cell::value_text, MISSING),
            title: text_or(row.cell(COL_TITLE), Cell::value_text, MISSING),
            last_update: text_or(row.cell(COL_LAST_UPDATE), Cell::display_text, MISSING),
            link: text_or(row.cell(COL_LINK), Cell::value_text, MISSING_LINK),
            date,
            month,
        }
    }

    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    /// Whether the area is real data rather than the sentinel.
    pub fn has_area(&self) -> bool {
        self.area != MISSING
    }

    pub fn has_link(&self) -> bool {
        self.link != MISSING_LINK
    }
}

pub fn normalize_rows(rows: &[Row]) -> Vec<EventRecord> {
    rows.iter().map(EventRecord::from_row).collect()
}

/// The month token of a `"<day> <month> <year>"` date: the second segment
/// when splitting on single spaces.
pub fn extract_month(date: &str) -> Option<String> {
    if date.is_empty() || date == MISSING {
        return None;
    }

    date.split(' ')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

fn text_or(cell: Option<&Cell>, read: fn(&Cell) -> Option<String>, sentinel: &str) -> String {
    cell.and_then(read).unwrap_or_else(|| sentinel.to_string())
}
