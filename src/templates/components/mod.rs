use crate::domain::FilterState;
use url::form_urlencoded::Serializer;

pub mod card;
pub mod error;
pub mod filters;
pub mod pagination;

pub use card::event_card;
pub use error::error_page;
pub use filters::{area_select, filter_form};
pub use pagination::{pagination_nav, results_summary};

/// Query string carrying `filter`, plus `page` when given. Empty facets are
/// left out.
pub fn filter_query(filter: &FilterState, page: Option<usize>) -> String {
    let mut query = Serializer::new(String::new());
    if !filter.search_text.is_empty() {
        query.append_pair("q", &filter.search_text);
    }
    if let Some(month) = &filter.selected_month {
        query.append_pair("month", month);
    }
    if let Some(area) = &filter.selected_area {
        query.append_pair("area", area);
    }
    if let Some(page) = page {
        query.append_pair("page", &page.to_string());
    }
    query.finish()
}

/// `path` with the filter query appended, if there is one.
pub fn filter_href(path: &str, filter: &FilterState, page: Option<usize>) -> String {
    let query = filter_query(filter, page);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
