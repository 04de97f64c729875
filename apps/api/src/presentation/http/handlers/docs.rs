use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "BlueAlert Dashboard API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": { "get": { "summary": "Dashboard page. A fresh visit shows the loading screen, which returns as `view` once its delay has passed; `hover` (name) or `region` (feature index) renders a region as hovered" } },
            "/map.svg": { "get": { "summary": "Flood risk map as SVG (supports `hover` and `region` queries)" } },
            "/india.json": { "get": { "summary": "Raw GeoJSON geography" } },
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/regions": { "get": { "summary": "Every map region with its risk level and color" } },
            "/api/v1/risk": { "get": { "summary": "Classify an arbitrary region name (`name` query)" } },
            "/api/v1/cards": { "get": { "summary": "Dashboard alert cards" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
