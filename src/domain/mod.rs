pub mod event;
pub mod facets;
pub mod filter;
pub mod pagination;

pub use event::{normalize_rows, EventRecord};
pub use facets::{area_options, month_options, FacetOption};
pub use filter::{filter_events, FilterEvent, FilterState};
pub use pagination::{paginate, total_pages, PageWindow, PAGE_SIZE};
