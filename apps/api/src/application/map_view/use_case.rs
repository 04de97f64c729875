use super::dto::MapViewRequest;
use crate::application::classify_region::dto::RegionRisk;
use crate::domain::{
    map::view::MapView,
    region::repository::GeographyRepository,
    risk::classifier::RiskProvider,
    shared::errors::DomainError,
};
use std::sync::Arc;

pub struct MapViewUseCase {
    repository: Arc<dyn GeographyRepository>,
    provider: Arc<dyn RiskProvider>,
}

impl MapViewUseCase {
    pub fn new(repository: Arc<dyn GeographyRepository>, provider: Arc<dyn RiskProvider>) -> Self {
        Self {
            repository,
            provider,
        }
    }

    /// Classify the whole geography, hovering the requested region if it exists.
    ///
    /// An unreadable geography renders as an empty map. The repository logs
    /// the cause once when the load fails.
    pub async fn execute(&self, request: MapViewRequest) -> Result<MapView, DomainError> {
        let regions = match self.repository.find_all().await {
            Ok(regions) => regions,
            Err(DomainError::InfrastructureError(cause)) => {
                tracing::debug!(%cause, "geography unavailable, rendering empty map");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let mut view = MapView::classify(regions, self.provider.as_ref());
        if let Some(index) = request.region {
            if !view.pointer_enter_at(index) {
                tracing::debug!(index, "hover index not on map");
            }
        } else if let Some(name) = request.hover.as_deref() {
            if !view.pointer_enter(name) {
                tracing::debug!(region = %name, "hover target not on map");
            }
        }
        Ok(view)
    }

    pub async fn list_regions(&self) -> Result<Vec<RegionRisk>, DomainError> {
        let view = self.execute(MapViewRequest::default()).await?;
        Ok(view
            .regions
            .into_iter()
            .map(|classified| RegionRisk::new(classified.region.name, classified.risk))
            .collect())
    }
}
