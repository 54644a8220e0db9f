//! Web Mercator (EPSG:3857), spherical formulas.
//!
//!   forward: x = R·λ, y = R·ln(tan(π/4 + φ/2))
//!   inverse: λ = x/R, φ = 2·atan(exp(y/R)) − π/2

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use foundation::math::Vec2;

use crate::error::TransformError;
use crate::math::{LonLat, ProjectionMath, WGS84_A, finite_geodetic, finite_projected};

/// Latitude where the square projected extent ends (atan(sinh(π))).
pub const WEB_MERCATOR_MAX_LAT_DEG: f64 = 85.051_128_779_806_59;

/// Half-width of the projected extent, `R·π`.
pub const WEB_MERCATOR_HALF_WORLD: f64 = 20_037_508.342_789_244;

#[derive(Debug, Copy, Clone)]
pub struct WebMercator {
    radius: f64,
}

impl WebMercator {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self::new(WGS84_A)
    }
}

impl ProjectionMath for WebMercator {
    fn forward(&self, ll: LonLat) -> Result<Vec2, TransformError> {
        let ll = finite_geodetic(ll)?;
        // Latitudes beyond the square world are pinned to its edge.
        let lat = ll
            .lat_deg
            .clamp(-WEB_MERCATOR_MAX_LAT_DEG, WEB_MERCATOR_MAX_LAT_DEG);
        let x = self.radius * ll.lon_deg.to_radians();
        let y = self.radius * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
        finite_projected(Vec2::new(x, y))
    }

    fn inverse(&self, p: Vec2) -> Result<LonLat, TransformError> {
        let p = finite_projected(p)?;
        let lon = (p.x / self.radius).to_degrees();
        let lat = (2.0 * (p.y / self.radius).exp().atan() - FRAC_PI_2).to_degrees();
        finite_geodetic(LonLat::new(lon, lat))
    }
}
