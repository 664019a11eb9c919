use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::mock_app::{read_json, MockApp};

#[tokio::test]
async fn test_submit_and_list_readings() {
    let app = MockApp::new();

    let response = app
        .post_json("/api/data", json!({ "value": 5, "timestamp": "T1" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "success": true }));

    app.post_json(
        "/api/data",
        json!({ "value": 7, "timestamp": "T2", "deviceId": "d1" }),
    )
    .await;

    let all = app.get_ok_json("/api/data").await;
    assert_eq!(
        all["dataPoints"],
        json!([
            { "value": 5.0, "timestamp": "T1" },
            { "value": 7.0, "timestamp": "T2", "deviceId": "d1" }
        ])
    );

    let filtered = app.get_ok_json("/api/data?deviceId=d1").await;
    assert_eq!(
        filtered["dataPoints"],
        json!([{ "value": 7.0, "timestamp": "T2", "deviceId": "d1" }])
    );
}

#[tokio::test]
async fn test_submit_reading_for_unknown_device() {
    let app = MockApp::new();

    let response = app
        .post_json(
            "/api/data",
            json!({ "value": 3, "timestamp": "T1", "deviceId": "ghost" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let filtered = app.get_ok_json("/api/data?deviceId=ghost").await;
    assert_eq!(filtered["dataPoints"].as_array().unwrap().len(), 1);

    // The device itself was never registered.
    let devices = app.get_ok_json("/api/devices").await;
    assert!(devices["devices"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_reading_missing_fields() {
    let app = MockApp::new();

    let response = app.post_json("/api/data", json!({ "value": 5 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = read_json(response).await;
    assert!(error["error"]["message"]
        .as_str()
        .unwrap()
        .contains("timestamp"));

    let response = app
        .post_json("/api/data", json!({ "timestamp": "T1" }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let all = app.get_ok_json("/api/data").await;
    assert!(all["dataPoints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_zero_value_reading() {
    let app = MockApp::new();

    let response = app
        .post_json("/api/data", json!({ "value": 0, "timestamp": "T1" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let all = app.get_ok_json("/api/data").await;
    assert_eq!(all["dataPoints"][0]["value"], json!(0.0));
}

#[tokio::test]
async fn test_reading_log_bound() {
    let app = MockApp::new();

    for value in 1..=101 {
        let response = app
            .post_json(
                "/api/data",
                json!({ "value": value, "timestamp": format!("T{value}") }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let all = app.get_ok_json("/api/data").await;
    let data_points = all["dataPoints"].as_array().unwrap();
    assert_eq!(data_points.len(), 100);
    assert_eq!(data_points[0]["value"], json!(2.0));
    assert_eq!(data_points[99]["value"], json!(101.0));
}
