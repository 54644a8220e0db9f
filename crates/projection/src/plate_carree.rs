//! Degree-identity projection: EPSG:4326 drawn directly on the plane.

use foundation::math::Vec2;

use crate::error::TransformError;
use crate::math::{LonLat, ProjectionMath, finite_geodetic, finite_projected};

#[derive(Debug, Default, Copy, Clone)]
pub struct PlateCarree;

impl ProjectionMath for PlateCarree {
    fn forward(&self, ll: LonLat) -> Result<Vec2, TransformError> {
        finite_projected(Vec2::new(ll.lon_deg, ll.lat_deg))
    }

    fn inverse(&self, p: Vec2) -> Result<LonLat, TransformError> {
        finite_geodetic(LonLat::new(p.x, p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::PlateCarree;
    use crate::math::{LonLat, ProjectionMath, Vec2};

    #[test]
    fn identity_round_trip() {
        let p = PlateCarree.forward(LonLat::new(12.5, -33.25)).unwrap();
        assert_eq!(p, Vec2::new(12.5, -33.25));
        let ll = PlateCarree.inverse(p).unwrap();
        assert_eq!(ll, LonLat::new(12.5, -33.25));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(PlateCarree.forward(LonLat::new(f64::NAN, 0.0)).is_err());
        assert!(PlateCarree.inverse(Vec2::new(0.0, f64::INFINITY)).is_err());
    }
}
