use crate::domain::{
    region::{
        entity::{GeoPoint, Region, Ring},
        repository::GeographyRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use geojson::{Feature, GeoJson, Value};
use std::path::PathBuf;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

/// Regions read from a GeoJSON feature collection on disk.
///
/// The file is read once, on first access, and the outcome is held for the
/// life of the process. A failed load is kept too: the geography is a static
/// resource, so later calls return the same error without touching the disk.
pub struct GeoJsonRegionRepository {
    path: PathBuf,
    regions: OnceCell<Result<Vec<Region>, DomainError>>,
}

impl GeoJsonRegionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            regions: OnceCell::new(),
        }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<Region>, DomainError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::InfrastructureError(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let regions = parse_regions(&text)?;
        info!(count = regions.len(), "geography loaded");
        Ok(regions)
    }

    async fn load_once(&self) -> Result<Vec<Region>, DomainError> {
        let loaded = self.load().await;
        if let Err(e) = &loaded {
            warn!(path = %self.path.display(), "geography unavailable, map will render empty: {}", e);
        }
        loaded
    }
}

#[async_trait]
impl GeographyRepository for GeoJsonRegionRepository {
    async fn find_all(&self) -> Result<Vec<Region>, DomainError> {
        self.regions
            .get_or_init(|| self.load_once())
            .await
            .clone()
    }
}

/// Parse GeoJSON text into regions, one per feature.
///
/// Accepts a FeatureCollection or a lone Feature. Features without drawable
/// geometry still yield a region with no rings.
pub fn parse_regions(text: &str) -> Result<Vec<Region>, DomainError> {
    let geojson: GeoJson = text
        .parse()
        .map_err(|e| DomainError::InfrastructureError(format!("invalid GeoJSON: {}", e)))?;

    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(DomainError::InfrastructureError(
                "expected a FeatureCollection, found a bare Geometry".into(),
            ));
        }
    };

    Ok(features.iter().map(region_from_feature).collect())
}

fn region_from_feature(feature: &Feature) -> Region {
    let name = Region::name_from_properties(feature.properties.as_ref());
    let rings = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Polygon(polygon)) => rings_of(polygon),
        Some(Value::MultiPolygon(polygons)) => polygons.iter().flat_map(|p| rings_of(p)).collect(),
        Some(_) => {
            debug!(region = %name, "skipping non-areal geometry");
            Vec::new()
        }
        None => Vec::new(),
    };
    Region::new(name, rings)
}

fn rings_of(polygon: &[Vec<Vec<f64>>]) -> Vec<Ring> {
    polygon
        .iter()
        .map(|ring| ring.iter().filter_map(|pos| to_point(pos)).collect::<Ring>())
        .filter(|ring| !ring.is_empty())
        .collect()
}

fn to_point(position: &[f64]) -> Option<GeoPoint> {
    match position {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some((*lon, *lat)),
        _ => None,
    }
}
