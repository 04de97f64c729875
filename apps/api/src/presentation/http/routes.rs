use super::{
    handlers::{cards, dashboard, docs, health, regions},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::services::ServeFile;

pub fn create_router(state: AppState) -> Router {
    let geography = ServeFile::new(&state.config.geojson_path);

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Dashboard
        .route("/", get(dashboard::dashboard_page))
        .route("/map.svg", get(dashboard::map_svg))
        .route_service("/india.json", geography)
        // Regions
        .route("/api/v1/regions", get(regions::list_regions))
        .route("/api/v1/risk", get(regions::classify_region))
        // Cards
        .route("/api/v1/cards", get(cards::list_cards))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
