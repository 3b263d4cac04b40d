// client.rs
use crate::config::AppConfig;
use crate::feed::models::{GvizResponse, Row};
use crate::feed::{FeedError, RowSource};
use rand::Rng;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("event_board/", env!("CARGO_PKG_VERSION"));
const RESPONSE_PREFIX: &str = "setResponse(";
const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_MILLIS: u64 = 1500;

pub struct SheetClient {
    client: Client,
    feed_url: Url,
    max_attempts: u64,
}

impl SheetClient {
    pub fn new(config: &AppConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.feed_timeout)
            .build()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let mut feed_url = Url::parse(&config.sheet_url)
            .map_err(|e| FeedError::Network(format!("invalid sheet url: {e}")))?;
        feed_url.query_pairs_mut().append_pair("tqx", "out:json");

        Ok(Self {
            client,
            feed_url,
            max_attempts: config.feed_max_attempts,
        })
    }

    pub fn fetch_with_retry(&self) -> Result<Vec<Row>, FeedError> {
        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            let start = std::time::Instant::now();

            match self.try_fetch() {
                Ok(rows) => {
                    info!(attempt, rows = rows.len(), elapsed = ?start.elapsed(), "sheet feed fetched");
                    return Ok(rows);
                }
                Err(e) => {
                    warn!(attempt, elapsed = ?start.elapsed(), error = %e, "sheet feed attempt failed");
                    last_err = Some(e);

                    if attempt < self.max_attempts {
                        let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
                        std::thread::sleep(Duration::from_secs(base) + Duration::from_millis(jitter));
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| FeedError::Network("feed retry loop made no attempts".into())))
    }

    fn try_fetch(&self) -> Result<Vec<Row>, FeedError> {
        debug!(url = %self.feed_url, "requesting sheet feed");

        let resp = self
            .client
            .get(self.feed_url.clone())
            .send()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16(), truncate(&text, 200)));
        }

        let response = parse_gviz_body(&text)?;
        Ok(response.table.map(|t| t.rows).unwrap_or_default())
    }
}

impl RowSource for SheetClient {
    fn fetch_rows(&self) -> Result<Vec<Row>, FeedError> {
        self.fetch_with_retry()
    }
}

/// Parses a gviz query body, with or without its JSONP wrapper
/// (`/*O_o*/ google.visualization.Query.setResponse({...});`).
pub fn parse_gviz_body(body: &str) -> Result<GvizResponse, FeedError> {
    let json = unwrap_jsonp(body)?;

    let response: GvizResponse =
        serde_json::from_str(json).map_err(|e| FeedError::JsonParse(e.to_string()))?;

    if response.status.as_deref() == Some("error") {
        let messages: Vec<String> = response.errors.iter().map(|e| e.describe()).collect();
        return Err(FeedError::Api(if messages.is_empty() {
            "unknown error".to_string()
        } else {
            messages.join("; ")
        }));
    }

    Ok(response)
}

fn unwrap_jsonp(body: &str) -> Result<&str, FeedError> {
    let trimmed = body.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    let start = trimmed
        .find(RESPONSE_PREFIX)
        .map(|i| i + RESPONSE_PREFIX.len())
        .ok_or_else(|| FeedError::Unwrap(truncate(trimmed, 80)))?;

    let end = trimmed
        .rfind(')')
        .filter(|&end| end >= start)
        .ok_or_else(|| FeedError::Unwrap("unterminated setResponse call".into()))?;

    Ok(trimmed[start..end].trim())
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","reqId":"0","status":"ok","sig":"1","table":{"cols":[],"rows":[{"c":[{"v":"Date(2024,0,10)","f":"10 Jan 2024"},null,{"v":"Gedung Sate"},{"v":"Bandung"},{"v":"Meetup A"}]},{"c":[]}],"parsedNumHeaders":1}});"#;

    #[test]
    fn parses_wrapped_response() {
        let response = parse_gviz_body(WRAPPED).unwrap();
        let rows = response.table.unwrap().rows;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cell(0).unwrap().f.as_deref(), Some("10 Jan 2024"));
        assert!(rows[0].cell(1).is_none());
        assert!(rows[0].cell(6).is_none());
        assert!(rows[1].cell(0).is_none());
    }

    #[test]
    fn parses_bare_json() {
        let response = parse_gviz_body(r#"{"status":"ok","table":{"rows":[]}}"#).unwrap();
        assert!(response.table.unwrap().rows.is_empty());
    }

    #[test]
    fn error_status_becomes_api_error() {
        let body = r#"google.visualization.Query.setResponse({"status":"error","errors":[{"reason":"access_denied","message":"Access denied","detailed_message":"Sheet is private"}]});"#;

        match parse_gviz_body(body) {
            Err(FeedError::Api(msg)) => assert_eq!(msg, "Sheet is private"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn html_login_page_is_rejected() {
        let err = parse_gviz_body("<!DOCTYPE html><html><body>Sign in</body></html>").unwrap_err();
        assert!(matches!(err, FeedError::Unwrap(_)));
    }

    #[test]
    fn feed_url_requests_json_output() {
        let config = AppConfig {
            sheet_url: "https://docs.google.com/spreadsheets/d/abc/gviz/tq".into(),
            ..AppConfig::default()
        };
        let client = SheetClient::new(&config).unwrap();

        assert_eq!(
            client.feed_url.as_str(),
            "https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out%3Ajson"
        );
    }
}
