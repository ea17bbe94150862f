//! Integration tests for maintenance facility endpoints.
//!
//! Run with: cargo test --test facilities_integration

mod common;

use axum::http::StatusCode;
use common::{
    create_ready_app, create_test_app, fleet_snapshot, get_request, parse_response_body,
    NORTH_FACILITY,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_list_facilities() {
    let app = create_ready_app().await;

    let response = app
        .router
        .oneshot(get_request("/api/v1/facilities"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let facilities = body.as_array().unwrap();
    assert_eq!(facilities.len(), 2);
    assert_eq!(facilities[0]["name"], "Posto Norte");
}

#[tokio::test]
async fn test_nearest_facility() {
    let app = create_ready_app().await;

    let response = app
        .router
        .oneshot(get_request("/api/v1/facilities/nearest?lat=-19.0&lon=-45.9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["point"]["lat"], -19.0);
    assert_eq!(body["nearest"]["facility"]["id"], NORTH_FACILITY);
    let meters = body["nearest"]["distanceMeters"].as_f64().unwrap();
    assert!(meters > 5_000.0 && meters < 10_000.0, "got {meters}");
}

#[tokio::test]
async fn test_nearest_facility_on_top_of_facility_is_zero_distance() {
    let app = create_ready_app().await;

    let response = app
        .router
        .oneshot(get_request("/api/v1/facilities/nearest?lat=-19.9&lon=-46.5"))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(body["nearest"]["facility"]["name"], "Posto Sul");
    assert!(body["nearest"]["distanceMeters"].as_f64().unwrap() < 1e-6);
}

#[tokio::test]
async fn test_nearest_facility_without_facilities_is_null() {
    let mut snapshot = fleet_snapshot();
    snapshot.facilities.clear();
    let app = create_test_app(snapshot);
    app.fleet.refresh().await.unwrap();

    let response = app
        .router
        .oneshot(get_request("/api/v1/facilities/nearest?lat=-19.0&lon=-45.9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert!(body["nearest"].is_null());
}

#[tokio::test]
async fn test_nearest_facility_rejects_out_of_range_point() {
    let app = create_ready_app().await;

    let response = app
        .router
        .oneshot(get_request("/api/v1/facilities/nearest?lat=95.0&lon=-45.9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_nearest_facility_requires_both_coordinates() {
    let app = create_ready_app().await;

    let response = app
        .router
        .oneshot(get_request("/api/v1/facilities/nearest?lat=-19.0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_facilities_are_dropped_during_aggregation() {
    let mut snapshot = fleet_snapshot();
    snapshot.facilities[0].lat = 123.0;
    let app = create_test_app(snapshot);
    app.fleet.refresh().await.unwrap();

    let response = app
        .router
        .oneshot(get_request("/api/v1/facilities"))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    let facilities = body.as_array().unwrap();
    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0]["name"], "Posto Sul");
}
