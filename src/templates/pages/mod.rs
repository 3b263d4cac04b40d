pub mod events;

pub use events::{events_page, results_fragment};
