mod client;
mod feed_error;
pub mod models;

pub use client::SheetClient;
pub use feed_error::FeedError;
pub use models::Row;

/// Anything that can hand the board a fresh set of raw sheet rows.
pub trait RowSource: Send + Sync {
    fn fetch_rows(&self) -> Result<Vec<Row>, FeedError>;
}
