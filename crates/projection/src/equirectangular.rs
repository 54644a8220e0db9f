//! Equidistant cylindrical projection in meters, with a standard parallel.
//!
//!   forward: x = R·λ·cos(φ₁), y = R·φ
//!   inverse: λ = x/(R·cos(φ₁)), φ = y/R

use foundation::math::Vec2;

use crate::error::TransformError;
use crate::math::{LonLat, ProjectionMath, WGS84_A, finite_geodetic, finite_projected};

#[derive(Debug, Copy, Clone)]
pub struct Equirectangular {
    radius: f64,
    cos_lat_ts: f64,
}

impl Equirectangular {
    pub fn new(radius: f64, lat_ts_deg: f64) -> Self {
        Self {
            radius,
            cos_lat_ts: lat_ts_deg.to_radians().cos(),
        }
    }
}

impl Default for Equirectangular {
    fn default() -> Self {
        Self::new(WGS84_A, 0.0)
    }
}

impl ProjectionMath for Equirectangular {
    fn forward(&self, ll: LonLat) -> Result<Vec2, TransformError> {
        let ll = finite_geodetic(ll)?;
        let x = self.radius * ll.lon_deg.to_radians() * self.cos_lat_ts;
        let y = self.radius * ll.lat_deg.to_radians();
        finite_projected(Vec2::new(x, y))
    }

    fn inverse(&self, p: Vec2) -> Result<LonLat, TransformError> {
        let p = finite_projected(p)?;
        let lon = (p.x / (self.radius * self.cos_lat_ts)).to_degrees();
        let lat = (p.y / self.radius).to_degrees();
        finite_geodetic(LonLat::new(lon, lat))
    }
}
