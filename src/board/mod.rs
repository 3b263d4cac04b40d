mod store;
mod view;

pub use store::EventBoard;
pub use view::{BoardView, LoadStatus};
