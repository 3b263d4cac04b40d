use crate::router::handle;
use crate::tests::utils::{body_bytes, get, loaded_app, sample_rows};

#[test]
fn export_downloads_filtered_workbook() {
    let app = loaded_app(sample_rows());

    let resp = handle(get("/events/export?month=Jan"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers()
            .get("Content-Disposition")
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"events_Jan.xlsx\""
    );

    let bytes = body_bytes(resp);
    assert!(bytes.starts_with(b"PK"), "xlsx files are zip archives");
}

#[test]
fn export_of_empty_result_still_succeeds() {
    let app = loaded_app(sample_rows());

    let resp = handle(get("/events/export?q=nothing-matches"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}
