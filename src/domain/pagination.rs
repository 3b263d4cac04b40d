// src/domain/pagination.rs

use serde::Serialize;
use std::ops::Range;

pub const PAGE_SIZE: usize = 9;
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A navigation control pointing at `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub page: usize,
    pub enabled: bool,
}

/// Everything needed to slice and render one page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page_numbers: Vec<usize>,
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index_exclusive: usize,
    pub first: NavLink,
    pub previous: NavLink,
    pub next: NavLink,
    pub last: NavLink,
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index_exclusive
    }

    /// Whether the navigation controls are worth showing at all.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Computes the window for `current_page`, or `None` when there is nothing
/// to page through.
///
/// `current_page` must already lie within `1..=total_pages`; the caller is
/// responsible for rejecting out-of-range requests.
pub fn paginate(count: usize, page_size: usize, current_page: usize) -> Option<PageWindow> {
    let total = total_pages(count, page_size);
    if total == 0 {
        return None;
    }
    debug_assert!(
        (1..=total).contains(&current_page),
        "page {current_page} outside 1..={total}"
    );

    let start_index = (current_page - 1) * page_size;
    let end_index_exclusive = (start_index + page_size).min(count);

    Some(PageWindow {
        page_numbers: visible_pages(current_page, total, MAX_VISIBLE_PAGES),
        total_pages: total,
        current_page,
        start_index,
        end_index_exclusive,
        first: NavLink {
            page: 1,
            enabled: current_page != 1,
        },
        previous: NavLink {
            page: current_page.saturating_sub(1),
            enabled: current_page > 1,
        },
        next: NavLink {
            page: current_page + 1,
            enabled: current_page < total,
        },
        last: NavLink {
            page: total,
            enabled: current_page != total,
        },
    })
}

/// Up to `width` consecutive page numbers around `current`, shifted to stay
/// full-width near either end.
pub fn visible_pages(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total == 0 || width == 0 {
        return Vec::new();
    }

    let mut start = current.saturating_sub(width / 2).max(1);
    let end = (start + width - 1).min(total);
    if end - start + 1 < width {
        start = (end + 1).saturating_sub(width).max(1);
    }

    (start..=end).collect()
}
