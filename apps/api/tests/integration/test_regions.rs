use super::helpers::{
    expect_status, get, read_json, read_text, send, spawn_app, spawn_app_without_geography,
};
use axum::http::StatusCode;
use serde_json::Value;
use std::time::Duration;

#[tokio::test]
async fn lists_every_region_with_risk_and_color() {
    let app = spawn_app(Duration::ZERO);
    let res = expect_status(send(&app.app, get("/api/v1/regions")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    let regions = body.as_array().expect("regions should be an array");
    let summary: Vec<(&str, &str, &str)> = regions
        .iter()
        .map(|r| {
            (
                r["name"].as_str().unwrap(),
                r["risk"].as_str().unwrap(),
                r["color"].as_str().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        [
            ("Kerala State Boundary", "High", "#ef4444"),
            ("West Bengal", "Medium", "#fcd34d"),
            ("Rajasthan", "Low", "#22c55e"),
            ("Unknown State", "Low", "#22c55e"),
        ]
    );
}

#[tokio::test]
async fn classifies_arbitrary_names() {
    let app = spawn_app(Duration::ZERO);

    for (query, risk) in [
        ("name=Maharashtra", "High"),
        ("name=Upper%20Assam", "High"),
        ("name=Gujarat", "Medium"),
        ("name=West%20Bengal", "Medium"),
        ("name=Punjab", "Low"),
        ("name=", "Low"),
        ("", "Low"),
    ] {
        let res = send(&app.app, get(&format!("/api/v1/risk?{}", query))).await;
        let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
        assert_eq!(body["risk"], risk, "query {:?}", query);
    }
}

#[tokio::test]
async fn overlong_names_are_rejected() {
    let app = spawn_app(Duration::ZERO);
    let uri = format!("/api/v1/risk?name={}", "a".repeat(201));
    let res = expect_status(send(&app.app, get(&uri)).await, StatusCode::BAD_REQUEST).await;
    let body: Value = read_json(res).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn serves_the_card_deck() {
    let app = spawn_app(Duration::ZERO);
    let res = expect_status(send(&app.app, get("/api/v1/cards")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    let cards = body["cards"].as_array().expect("cards should be an array");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["value"], "31°C");
    assert_eq!(cards[1]["icon"], "cloud_rain");
    assert_eq!(cards[2]["tone"], "yellow");
}

#[tokio::test(start_paused = true)]
async fn health_reports_loading_views_and_region_count() {
    let app = spawn_app(Duration::from_secs(1));
    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["regions"], 4);
    assert_eq!(body["loading_views"], 0);
    assert!(body["checked_at"].is_string());

    let html = read_text(send(&app.app, get("/")).await).await;
    assert!(html.contains("Loading BlueAlert Data..."));
    let body: Value = read_json(send(&app.app, get("/health")).await).await;
    assert_eq!(body["loading_views"], 1);

    tokio::time::sleep(Duration::from_millis(1001)).await;
    let body: Value = read_json(send(&app.app, get("/health")).await).await;
    assert_eq!(body["loading_views"], 0);
}

#[tokio::test]
async fn health_is_unhealthy_without_geography() {
    let app = spawn_app_without_geography();
    let res = expect_status(
        send(&app.app, get("/health")).await,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["geography"], "down");
}

#[tokio::test]
async fn docs_list_the_routes() {
    let app = spawn_app(Duration::ZERO);
    let body: Value = read_json(send(&app.app, get("/api/v1/docs")).await).await;
    for path in ["/", "/map.svg", "/api/v1/regions", "/api/v1/risk"] {
        assert!(body["paths"][path].is_object(), "{}", path);
    }
}
