use crate::board::{EventBoard, LoadStatus};
use crate::router::{handle, AppContext};
use crate::tests::utils::{body_string, get, post, sample_rows, FailingSource, StaticSource};

#[test]
fn refresh_loads_rows_and_redirects_home() {
    let app = AppContext::new(EventBoard::new(), Box::new(StaticSource::new(sample_rows())));

    let before = body_string(handle(get("/"), &app).unwrap());
    assert!(before.contains("Data belum dimuat."));
    assert!(before.contains("Belum ada data event"));

    let resp = handle(post("/refresh"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302, "Should redirect after refresh");
    assert_eq!(resp.headers().get("Location").unwrap().to_str().unwrap(), "/");

    assert_eq!(app.board.record_count().unwrap(), 13);
    let after = body_string(handle(get("/"), &app).unwrap());
    assert!(after.contains("Terakhir diperbarui"));
    assert!(after.contains("Meetup A"));
}

#[test]
fn failed_refresh_is_reported_on_the_page() {
    let app = AppContext::new(EventBoard::new(), Box::new(FailingSource));

    let resp = handle(post("/refresh"), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(matches!(
        app.board.status().unwrap(),
        LoadStatus::Failed { .. }
    ));

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Gagal memuat data"));
    assert!(body.contains("connection refused"));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = AppContext::new(EventBoard::new(), Box::new(FailingSource));

    for req in [get("/admin"), get("/refresh")] {
        match handle(req, &app) {
            Err(err) => assert_eq!(err.status(), 404),
            Ok(resp) => panic!("expected 404, got {}", resp.status()),
        }
    }
}
