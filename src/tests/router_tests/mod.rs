mod events_page_tests;
mod export_tests;
mod refresh_tests;
