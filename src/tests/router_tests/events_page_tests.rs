// src/tests/router_tests/events_page_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, htmx_get, loaded_app, sample_rows};

#[test]
fn index_renders_cards_facets_and_pagination() {
    let app = loaded_app(sample_rows());

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Meetup A"));
    assert!(body.contains("Jan (2 event)"));
    assert!(body.contains("Feb (10 event)"));
    assert!(body.contains("Jakarta (2 event)"));
    assert!(body.contains("Bandung (10 event)"));
    assert!(body.contains("Total Events: <strong>13</strong>"));
    assert!(body.contains("Showing page 1 of 2"));
    assert!(body.contains("Event pagination"));
    assert!(
        !body.contains("Secret Event"),
        "the last record belongs on page 2"
    );
}

#[test]
fn month_filter_narrows_results_and_area_options() {
    let app = loaded_app(sample_rows());

    let resp = handle(get("/events?month=Jan"), &app).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Meetup A"));
    assert!(body.contains("Rust Jakarta"));
    assert!(!body.contains("Workshop"));
    assert!(body.contains(r#"hx-swap-oob="true""#));
    assert!(body.contains("Jakarta (2 event)"));
    assert!(!body.contains("Bandung (10 event)"));
    assert!(
        !body.contains("Event pagination"),
        "a single page needs no navigation"
    );
}

#[test]
fn changing_month_drops_the_area_selection() {
    let app = loaded_app(sample_rows());

    let plain = body_string(handle(get("/events?month=Feb&area=Jakarta"), &app).unwrap());
    assert!(plain.contains("Tidak ada event yang ditemukan"));

    let triggered = body_string(
        handle(htmx_get("/events?month=Feb&area=Jakarta", "month"), &app).unwrap(),
    );
    assert!(triggered.contains("Total Events: <strong>10</strong>"));
    assert!(triggered.contains("Workshop 2"));
}

#[test]
fn page_links_move_through_results() {
    let app = loaded_app(sample_rows());

    let body = body_string(handle(get("/events?page=2"), &app).unwrap());
    assert!(body.contains("Showing page 2 of 2"));
    assert!(body.contains("Workshop 8"));
    assert!(body.contains("Secret Event"));
    assert!(!body.contains("Meetup A"));
}

#[test]
fn out_of_range_page_shows_first_page() {
    let app = loaded_app(sample_rows());

    let body = body_string(handle(get("/events?page=5"), &app).unwrap());
    assert!(body.contains("Showing page 1 of 2"));
    assert!(body.contains("Meetup A"));
}

#[test]
fn typing_a_search_resets_to_first_page() {
    let app = loaded_app(sample_rows());

    let body = body_string(handle(htmx_get("/events?q=WORKSHOP&page=2", "q"), &app).unwrap());
    assert!(body.contains("Total Events: <strong>10</strong>"));
    assert!(body.contains("Showing page 1 of 2"));
    assert!(body.contains("Workshop 2"));
    assert!(!body.contains("Meetup A"));
}

#[test]
fn unmatched_search_shows_no_results_message() {
    let app = loaded_app(sample_rows());

    let body = body_string(handle(get("/?q=tidak-ada"), &app).unwrap());
    assert!(body.contains("Tidak ada event yang ditemukan"));
    assert!(body.contains("Total Events: <strong>0</strong>"));
    assert!(!body.contains("Showing page"));
}

#[test]
fn json_view_exposes_facets_and_window() {
    let app = loaded_app(sample_rows());

    let resp = handle(get("/events.json?area=Bandung"), &app).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["total"], 10);
    assert_eq!(json["record_count"], 13);
    assert_eq!(json["month_options"][0]["value"], "Jan");
    assert_eq!(json["pagination"]["total_pages"], 2);
    assert_eq!(json["pagination"]["page_numbers"], serde_json::json!([1, 2]));
    assert_eq!(json["status"]["state"], "loaded");
    assert_eq!(json["events"][0]["area"], "Bandung");
}

#[test]
fn area_outside_the_selected_month_stays_selected() {
    let app = loaded_app(sample_rows());

    let body = body_string(handle(get("/?month=Feb&area=Jakarta"), &app).unwrap());
    assert!(body.contains("Tidak ada event yang ditemukan"));
    assert!(body.contains(r#"<option value="Jakarta" selected>Jakarta (0 event)</option>"#));
    assert!(body.contains("Bandung (10 event)"));
}

#[test]
fn json_view_resets_page_when_nothing_matches() {
    let app = loaded_app(sample_rows());

    let resp = handle(get("/events.json?q=zzz&page=99"), &app).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["total"], 0);
    assert_eq!(json["filter"]["current_page"], 1);
    assert!(json["pagination"].is_null());
}

#[test]
fn unreadable_trigger_header_is_a_bad_request() {
    let app = loaded_app(sample_rows());
    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri("/events?q=meetup")
        .header("HX-Trigger-Name", http::HeaderValue::from_bytes(b"q\xff").unwrap())
        .body(astra::Body::empty())
        .unwrap();

    match handle(req, &app) {
        Err(err) => {
            assert_eq!(err.status(), 400);
            assert!(err.to_string().contains("HX-Trigger-Name"));
        }
        Ok(resp) => panic!("expected 400, got {}", resp.status()),
    }
}
