// src/domain/facets.rs

use crate::domain::event::EventRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Month tokens in calendar order, as they appear in the sheet's dates.
pub const MONTH_ORDER: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

impl FacetOption {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }

    pub fn label(&self) -> String {
        format!("{} ({} event)", self.value, self.count)
    }
}

/// Counts records per key. Records for which `key` returns `None` are skipped.
pub fn count_by<'a, I, F>(records: I, key: F) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a EventRecord>,
    F: Fn(&'a EventRecord) -> Option<&'a str>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// Month options in calendar order. Months without events are left out, as
/// are month tokens outside [`MONTH_ORDER`].
pub fn month_options(records: &[EventRecord]) -> Vec<FacetOption> {
    let counts = count_by(records, EventRecord::month);

    MONTH_ORDER
        .iter()
        .filter_map(|month| {
            counts
                .get(month)
                .map(|&count| FacetOption::new(*month, count))
        })
        .collect()
}

/// Area options sorted by name, counted over the selected month only when one
/// is selected. The missing-area sentinel is never offered.
pub fn area_options(records: &[EventRecord], selected_month: Option<&str>) -> Vec<FacetOption> {
    let in_month = records
        .iter()
        .filter(|record| selected_month.map_or(true, |month| record.month() == Some(month)));

    let counts = count_by(in_month, |record| {
        record.has_area().then_some(record.area.as_str())
    });

    let mut options: Vec<FacetOption> = counts
        .into_iter()
        .map(|(area, count)| FacetOption::new(area, count))
        .collect();
    options.sort_by(|a, b| compare_names(&a.value, &b.value));
    options
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
