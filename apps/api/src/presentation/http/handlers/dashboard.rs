use crate::application::map_view::dto::MapViewRequest;
use crate::presentation::html::{
    dashboard::{render_dashboard, render_loading},
    map::render_map,
};
use crate::presentation::http::{errors::AppError, state::AppState};
use crate::workers::page_views::Visit;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use uuid::Uuid;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    /// View id handed out by the loading screen. Anything unparseable is
    /// treated as a fresh visit.
    pub view: Option<String>,
    pub hover: Option<String>,
    pub region: Option<usize>,
}

/// The dashboard page. A fresh visit gets the loading screen; the same view
/// gets the dashboard once its delay has passed.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let view = params.view.as_deref().and_then(|id| id.parse::<Uuid>().ok());
    let request = MapViewRequest {
        hover: params.hover,
        region: params.region,
    };

    let html = match state.page_views.visit(view, request) {
        Visit::Loading { view, remaining } => render_loading(view, remaining)?,
        Visit::Ready(request) => {
            let view = state.map_view.execute(request).await?;
            let map_svg = render_map(&view, &state.projection)?;
            render_dashboard(&state.cards, map_svg)?
        }
    };

    Ok(([(header::CACHE_CONTROL, "no-store")], Html(html)))
}

/// The map alone as an SVG document.
pub async fn map_svg(
    State(state): State<AppState>,
    Query(params): Query<MapViewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.map_view.execute(params).await?;
    let svg = render_map(&view, &state.projection)?;
    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}
