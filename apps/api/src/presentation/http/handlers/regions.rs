use crate::application::classify_region::dto::{ClassifyRequest, RegionRisk};
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
};

pub async fn list_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionRisk>>, AppError> {
    Ok(Json(state.map_view.list_regions().await?))
}

pub async fn classify_region(
    State(state): State<AppState>,
    Query(params): Query<ClassifyRequest>,
) -> Result<Json<RegionRisk>, AppError> {
    Ok(Json(state.classifier.execute(params)?))
}
