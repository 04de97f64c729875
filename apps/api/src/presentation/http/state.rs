use crate::{
    application::{classify_region::use_case::ClassifyRegionUseCase, map_view::use_case::MapViewUseCase},
    config::Config,
    domain::{dashboard::cards::CardDeck, map::projection::Mercator},
    workers::page_views::PageViews,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub map_view: Arc<MapViewUseCase>,
    pub classifier: Arc<ClassifyRegionUseCase>,
    pub cards: Arc<CardDeck>,
    pub projection: Mercator,
    pub page_views: Arc<PageViews>,
}
