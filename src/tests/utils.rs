use crate::board::EventBoard;
use crate::feed::models::Cell;
use crate::feed::{FeedError, Row, RowSource};
use crate::router::AppContext;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// A sheet row with date, location, area and title filled in.
pub fn event_row(title: &str, area: &str, date: &str) -> Row {
    Row::new(vec![
        Some(Cell::formatted(format!("Date({date})"), date)),
        Some(Cell::formatted("Date(1899,11,30,19,0,0)", "19:00")),
        Some(Cell::raw(format!("Gedung {title}"))),
        Some(Cell::raw(area)),
        Some(Cell::raw(title)),
        Some(Cell::formatted("Date(2024,0,1)", "1 Jan 2024")),
        Some(Cell::raw(format!("https://example.com/{}", title.replace(' ', "-")))),
    ])
}

/// Serves a fixed set of rows.
pub struct StaticSource {
    rows: Vec<Row>,
}

impl StaticSource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl RowSource for StaticSource {
    fn fetch_rows(&self) -> Result<Vec<Row>, FeedError> {
        Ok(self.rows.clone())
    }
}

/// Always fails like an unreachable sheet.
pub struct FailingSource;

impl RowSource for FailingSource {
    fn fetch_rows(&self) -> Result<Vec<Row>, FeedError> {
        Err(FeedError::Network("connection refused".into()))
    }
}

/// Two Jakarta events in January, ten Bandung events in February and
/// one undated event without an area.
pub fn sample_rows() -> Vec<Row> {
    let mut rows = vec![
        event_row("Meetup A", "Jakarta", "10 Jan 2024"),
        event_row("Rust Jakarta", "Jakarta", "24 Jan 2024"),
    ];
    rows.extend((1..=10).map(|i| event_row(&format!("Workshop {i}"), "Bandung", "5 Feb 2024")));
    rows.push(Row::new(vec![None, None, None, None, Some(Cell::raw("Secret Event"))]));
    rows
}

/// An app whose board is already loaded from `rows`.
pub fn loaded_app(rows: Vec<Row>) -> AppContext {
    let app = AppContext::new(EventBoard::new(), Box::new(StaticSource::new(rows)));
    app.board
        .refresh(app.source.as_ref())
        .unwrap_or_else(|e| panic!("loading test board failed: {e}"));
    app
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// A GET as htmx sends it when the control named `trigger` changes.
pub fn htmx_get(uri: &str, trigger: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .header("HX-Trigger-Name", trigger)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = resp.into_body();
    let mut bytes = Vec::new();
    body.reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
