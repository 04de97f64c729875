//! Spherical Mercator projection onto the map viewport.

use crate::domain::region::entity::GeoPoint;
use std::f64::consts::FRAC_PI_4;

/// Latitudes are clamped here; Mercator diverges at the poles.
const MAX_LATITUDE: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    /// Pixels per radian
    pub scale: f64,
    /// (longitude, latitude) placed at the viewport center
    pub center: GeoPoint,
    pub width: f64,
    pub height: f64,
}

impl Default for Mercator {
    /// India framed in an 800×600 viewport.
    fn default() -> Self {
        Self {
            scale: 1200.0,
            center: (82.8, 22.5),
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Mercator {
    /// Project a (longitude, latitude) pair to viewport (x, y), y growing downward.
    pub fn project(&self, (lon, lat): GeoPoint) -> (f64, f64) {
        let (center_lon, center_lat) = self.center;
        let x = self.width / 2.0 + self.scale * (lon - center_lon).to_radians();
        let y = self.height / 2.0 - self.scale * (mercator_y(lat) - mercator_y(center_lat));
        (x, y)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

fn mercator_y(lat: f64) -> f64 {
    let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    (FRAC_PI_4 + phi / 2.0).tan().ln()
}
