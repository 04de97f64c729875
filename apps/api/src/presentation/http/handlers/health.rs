use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    geography: &'static str,
    regions: usize,
    loading_views: usize,
    version: &'static str,
    checked_at: DateTime<Utc>,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let loading_views = state.page_views.pending();
    let regions = match state.map_view.list_regions().await {
        Ok(regions) => regions.len(),
        Err(e) => {
            tracing::error!("Health check failed: geography unavailable: {}", e);
            0
        }
    };

    let geography = if regions > 0 { "up" } else { "down" };
    let status = if geography == "up" {
        "healthy"
    } else {
        "unhealthy"
    };

    let response = HealthResponse {
        status,
        geography,
        regions,
        loading_views,
        version: env!("CARGO_PKG_VERSION"),
        checked_at: Utc::now(),
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
