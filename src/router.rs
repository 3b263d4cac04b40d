use crate::board::{BoardView, EventBoard};
use crate::domain::{FilterEvent, FilterState};
use crate::errors::ServerError;
use crate::feed::RowSource;
use crate::responses::{html_response, json_response, redirect_response, ResultResp};
use crate::spreadsheets::export_events_xlsx;
use crate::templates;
use astra::Request;
use tracing::debug;

/// Name of the control that fired an htmx request.
const HX_TRIGGER_NAME: &str = "HX-Trigger-Name";

/// Everything a request handler needs: the board and where to reload it from.
pub struct AppContext {
    pub board: EventBoard,
    pub source: Box<dyn RowSource>,
}

impl AppContext {
    pub fn new(board: EventBoard, source: Box<dyn RowSource>) -> Self {
        Self { board, source }
    }
}

pub fn handle(req: Request, app: &AppContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let view = board_view(&req, app)?;
            html_response(templates::pages::events_page(&view))
        }
        ("GET", "/events") => {
            let view = board_view(&req, app)?;
            html_response(templates::pages::results_fragment(&view))
        }
        ("GET", "/events.json") => {
            let view = board_view(&req, app)?;
            json_response(&view)
        }
        ("GET", "/events/export") => {
            let state = filter_state(&req, app)?;
            let events = app.board.filtered(&state)?;
            export_events_xlsx(&events, &state)
        }
        ("POST", "/refresh") => match app.board.refresh(app.source.as_ref()) {
            // Feed failures are shown on the page via the load status.
            Ok(_) | Err(ServerError::FeedError(_)) => redirect_response("/"),
            Err(e) => Err(e),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn board_view(req: &Request, app: &AppContext) -> Result<BoardView, ServerError> {
    let state = filter_state(req, app)?;
    app.board.view(&state)
}

/// Rebuilds the filter state from the query string, then applies the event
/// that triggered this request: the htmx control that changed, or else a
/// page click.
fn filter_state(req: &Request, app: &AppContext) -> Result<FilterState, ServerError> {
    let query = FilterQuery::parse(req.uri().query());
    let mut state = FilterState::new(
        query.search.clone(),
        query.month.clone(),
        query.area.clone(),
    );

    let trigger = req
        .headers()
        .get(HX_TRIGGER_NAME)
        .map(|v| v.to_str())
        .transpose()
        .map_err(|_| ServerError::BadRequest(format!("unreadable {HX_TRIGGER_NAME} header")))?;

    let event = match trigger {
        Some("q") => Some(FilterEvent::Search(query.search)),
        Some("month") => Some(FilterEvent::Month(query.month)),
        Some("area") => Some(FilterEvent::Area(query.area)),
        _ => query.page.map(FilterEvent::Page),
    };

    if let Some(event) = event {
        app.board.apply(&mut state, event)?;
    }
    Ok(state)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct FilterQuery {
    search: String,
    month: Option<String>,
    area: Option<String>,
    page: Option<usize>,
}

impl FilterQuery {
    fn parse(query: Option<&str>) -> Self {
        let mut parsed = FilterQuery::default();
        let Some(query) = query else {
            return parsed;
        };

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match &*key {
                "q" => parsed.search = value,
                "month" => parsed.month = Some(value).filter(|v| !v.is_empty()),
                "area" => parsed.area = Some(value).filter(|v| !v.is_empty()),
                "page" => parsed.page = value.parse().ok(),
                _ => {}
            }
        }

        parsed
    }
}
