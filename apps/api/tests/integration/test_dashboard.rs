use super::helpers::{
    expect_status, get, open_dashboard, read_json, read_text, send, spawn_app,
    spawn_app_without_geography, view_id,
};
use axum::http::{StatusCode, header};
use serde_json::Value;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn loading_screen_until_delay_then_map() {
    let app = spawn_app(Duration::from_millis(1000));

    let res = expect_status(send(&app.app, get("/")).await, StatusCode::OK).await;
    let html = read_text(res).await;
    assert!(html.contains("Loading BlueAlert Data..."));
    assert!(!html.contains("india-map"));
    assert!(!html.contains("data-region"));
    let view = view_id(&html).expect("loading screen without a view id");

    tokio::time::sleep(Duration::from_millis(500)).await;
    let html = read_text(send(&app.app, get(&format!("/?view={}", view))).await).await;
    assert!(html.contains("Loading BlueAlert Data..."));
    assert_eq!(view_id(&html).as_deref(), Some(view.as_str()));

    tokio::time::sleep(Duration::from_millis(501)).await;
    let html = read_text(send(&app.app, get(&format!("/?view={}", view))).await).await;
    assert!(!html.contains("Loading BlueAlert Data..."));
    assert!(html.contains("class=\"india-map\""));
    assert!(html.contains("Climate Alert <span>Dashboard</span>"));
    assert!(html.contains("Flood Alert Status"));
}

#[tokio::test(start_paused = true)]
async fn every_visit_shows_the_loading_screen_first() {
    let app = spawn_app(Duration::from_millis(1000));
    tokio::time::sleep(Duration::from_secs(5)).await;

    let html = read_text(send(&app.app, get("/")).await).await;
    assert!(html.contains("Loading BlueAlert Data..."));
    assert!(!html.contains("india-map"));
    let first = view_id(&html).expect("loading screen without a view id");

    tokio::time::sleep(Duration::from_millis(1001)).await;
    let html = read_text(send(&app.app, get(&format!("/?view={}", first))).await).await;
    assert!(html.contains("class=\"india-map\""));

    // Reloading a consumed view is a new visit
    let html = read_text(send(&app.app, get(&format!("/?view={}", first))).await).await;
    assert!(html.contains("Loading BlueAlert Data..."));
    assert_ne!(view_id(&html), Some(first));
}

#[tokio::test]
async fn malformed_view_id_is_a_fresh_visit() {
    let app = spawn_app(Duration::from_millis(1000));
    let res = expect_status(send(&app.app, get("/?view=not-a-uuid")).await, StatusCode::OK).await;
    let html = read_text(res).await;
    assert!(html.contains("Loading BlueAlert Data..."));
    assert!(view_id(&html).is_some());
}

#[tokio::test]
async fn dashboard_draws_one_shape_per_feature() {
    let app = spawn_app(Duration::ZERO);
    let html = open_dashboard(&app, "/").await;

    assert_eq!(html.matches("<path class=\"region").count(), 4);
    assert!(html.contains("fill=\"#fcd34d\" data-index=\"1\" data-region=\"West Bengal\""));
    assert!(html.contains("fill=\"#22c55e\" data-index=\"2\" data-region=\"Rajasthan\""));
    assert!(html.contains("data-region=\"Unknown State\""));
    assert!(html.contains("id=\"map-tooltip\" visibility=\"hidden\""));
}

#[tokio::test]
async fn hovered_region_shows_highlight_and_tooltip() {
    let app = spawn_app(Duration::ZERO);
    let html = open_dashboard(&app, "/?hover=Kerala%20State%20Boundary").await;

    assert!(html.contains(
        "class=\"region hovered\" d=\"M"
    ));
    assert_eq!(html.matches("class=\"region hovered\"").count(), 1);
    assert!(html.contains("fill=\"#ef4444\" data-index=\"0\" data-region=\"Kerala State Boundary\""));
    assert!(html.contains("Region: Kerala State Boundary"));
    assert!(html.contains("Risk: <tspan id=\"map-tooltip-risk\" fill=\"#ef4444\">High</tspan>"));
    assert!(html.contains("id=\"map-tooltip\" visibility=\"visible\""));
}

#[tokio::test]
async fn hover_on_unknown_region_is_ignored() {
    let app = spawn_app(Duration::ZERO);
    let html = open_dashboard(&app, "/?hover=Atlantis").await;

    assert!(!html.contains("region hovered"));
    assert!(html.contains("id=\"map-tooltip\" visibility=\"hidden\""));
}

#[tokio::test]
async fn map_svg_is_served_standalone() {
    let app = spawn_app(Duration::ZERO);
    let res = expect_status(send(&app.app, get("/map.svg?hover=West%20Bengal")).await, StatusCode::OK).await;

    assert_eq!(
        res.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );
    let svg = read_text(res).await;
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("Risk: <tspan id=\"map-tooltip-risk\" fill=\"#fcd34d\">Medium</tspan>"));
    assert!(!svg.contains("<html"));
}

#[tokio::test]
async fn geography_resource_is_served() {
    let app = spawn_app(Duration::ZERO);
    let res = expect_status(send(&app.app, get("/india.json")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["type"], "FeatureCollection");
    assert_eq!(body["features"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn missing_geography_renders_an_empty_map() {
    let app = spawn_app_without_geography();
    let html = open_dashboard(&app, "/").await;

    assert!(html.contains("class=\"india-map\""));
    assert_eq!(html.matches("<path class=\"region").count(), 0);
    assert!(html.contains("Flood Risk Legend"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app(Duration::ZERO);
    let res = send(&app.app, get("/")).await;
    let id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("missing x-request-id");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn unnamed_features_hover_by_index() {
    let app = spawn_app(Duration::ZERO);
    let html = open_dashboard(&app, "/?region=3").await;

    assert_eq!(html.matches("class=\"region hovered\"").count(), 1);
    assert!(html.contains("data-index=\"3\" data-region=\"Unknown State\""));
    assert!(html.contains("Region: Unknown State"));
}
