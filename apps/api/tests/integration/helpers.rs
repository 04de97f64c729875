use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bluealert::{
    application::{
        classify_region::use_case::ClassifyRegionUseCase, map_view::use_case::MapViewUseCase,
    },
    config::Config,
    domain::{
        dashboard::cards::CardDeck,
        map::projection::Mercator,
        risk::classifier::{RiskProvider, RiskTable},
    },
    infrastructure::repositories::geojson_region_repository::GeoJsonRegionRepository,
    presentation::http::{routes::create_router, state::AppState},
    workers::page_views::PageViews,
};
use serde::de::DeserializeOwned;
use std::{io::Write, path::PathBuf, sync::Arc, time::Duration};
use tempfile::NamedTempFile;
use tower::ServiceExt;

pub const GEOGRAPHY: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "ST_NM": "Kerala State Boundary" },
            "geometry": { "type": "Polygon", "coordinates": [[[75.0, 8.2], [77.4, 8.2], [77.4, 12.8], [75.0, 12.8], [75.0, 8.2]]] }
        },
        {
            "type": "Feature",
            "properties": { "name": "West Bengal" },
            "geometry": { "type": "Polygon", "coordinates": [[[86.0, 21.5], [89.9, 21.5], [89.9, 27.2], [86.0, 27.2], [86.0, 21.5]]] }
        },
        {
            "type": "Feature",
            "properties": { "ST_NM": "Rajasthan" },
            "geometry": { "type": "Polygon", "coordinates": [[[69.5, 23.0], [78.2, 23.0], [78.2, 30.2], [69.5, 30.2], [69.5, 23.0]]] }
        },
        {
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Polygon", "coordinates": [[[80.0, 15.0], [81.0, 15.0], [81.0, 16.0], [80.0, 15.0]]] }
        }
    ]
}"#;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    // Keeps the geography file alive for the duration of the test
    _geography: Option<NamedTempFile>,
}

fn build_config(geojson_path: PathBuf, loading_delay: Duration) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        geojson_path,
        loading_delay_ms: loading_delay.as_millis() as u64,
        cards_path: None,
        risk_table_path: None,
    }
}

fn geography_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create geography file");
    file.write_all(contents.as_bytes())
        .expect("failed to write geography file");
    file
}

fn build_app(geojson_path: PathBuf, loading_delay: Duration, geography: Option<NamedTempFile>) -> TestApp {
    let config = build_config(geojson_path.clone(), loading_delay);
    let risk_table: Arc<dyn RiskProvider> = Arc::new(RiskTable::default());

    let state = AppState {
        config: config.clone(),
        map_view: Arc::new(MapViewUseCase::new(
            Arc::new(GeoJsonRegionRepository::new(geojson_path)),
            risk_table.clone(),
        )),
        classifier: Arc::new(ClassifyRegionUseCase::new(risk_table)),
        cards: Arc::new(CardDeck::default()),
        projection: Mercator::default(),
        page_views: Arc::new(PageViews::new(config.loading_delay())),
    };

    TestApp {
        app: create_router(state.clone()),
        state,
        _geography: geography,
    }
}

/// An app over [`GEOGRAPHY`] whose page views load for `loading_delay`.
pub fn spawn_app(loading_delay: Duration) -> TestApp {
    let file = geography_file(GEOGRAPHY);
    let path = file.path().to_path_buf();
    build_app(path, loading_delay, Some(file))
}

/// An app whose geography file does not exist.
pub fn spawn_app_without_geography() -> TestApp {
    build_app(
        PathBuf::from("/nonexistent/bluealert/india.json"),
        Duration::ZERO,
        None,
    )
}

/// The view id a loading screen will return as, if `html` is one.
pub fn view_id(html: &str) -> Option<String> {
    const MARKER: &str = "data-view=\"";
    let start = html.find(MARKER)? + MARKER.len();
    html.get(start..start + 36).map(str::to_string)
}

/// Request `uri` and follow the loading screen until the dashboard renders.
pub async fn open_dashboard(app: &TestApp, uri: &str) -> String {
    let res = expect_status(send(&app.app, get(uri)).await, StatusCode::OK).await;
    let mut html = read_text(res).await;
    while let Some(view) = view_id(&html) {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let res = send(&app.app, get(&format!("/?view={}", view))).await;
        html = read_text(expect_status(res, StatusCode::OK).await).await;
    }
    html
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}
