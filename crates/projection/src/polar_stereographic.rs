//! Spherical polar stereographic projection, north or south aspect.
//!
//!   forward: ρ = 2·R·k₀·tan(π/4 − s·φ/2),
//!            x = ρ·sin λ + FE, y = −s·ρ·cos λ + FN
//!   inverse: ρ = √(dx² + dy²), φ = s·(π/2 − 2·atan(ρ/(2·R·k₀))),
//!            λ = atan2(dx, −s·dy)
//!
//! where s = +1 for the north aspect and −1 for the south aspect.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use foundation::math::Vec2;

use crate::error::TransformError;
use crate::math::{LonLat, ProjectionMath, finite_geodetic, finite_projected};

#[derive(Debug, Copy, Clone)]
pub struct PolarStereographic {
    radius: f64,
    scale: f64,
    false_easting: f64,
    false_northing: f64,
    sign: f64,
}

impl PolarStereographic {
    pub fn north(radius: f64, scale: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            radius,
            scale,
            false_easting,
            false_northing,
            sign: 1.0,
        }
    }

    pub fn south(radius: f64, scale: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            radius,
            scale,
            false_easting,
            false_northing,
            sign: -1.0,
        }
    }
}

impl ProjectionMath for PolarStereographic {
    fn forward(&self, ll: LonLat) -> Result<Vec2, TransformError> {
        let ll = finite_geodetic(ll)?;
        let lon = ll.lon_deg.to_radians();
        let lat = ll.lat_deg.to_radians();
        let rho = 2.0 * self.radius * self.scale * (FRAC_PI_4 - self.sign * lat / 2.0).tan();
        let x = rho * lon.sin() + self.false_easting;
        let y = -self.sign * rho * lon.cos() + self.false_northing;
        finite_projected(Vec2::new(x, y))
    }

    fn inverse(&self, p: Vec2) -> Result<LonLat, TransformError> {
        let p = finite_projected(p)?;
        let dx = p.x - self.false_easting;
        let dy = p.y - self.false_northing;
        let rho = dx.hypot(dy);
        let lat = self.sign * (FRAC_PI_2 - 2.0 * (rho / (2.0 * self.radius * self.scale)).atan());
        let lon = if rho == 0.0 {
            // The projection pole; any longitude maps there.
            0.0
        } else {
            dx.atan2(-self.sign * dy)
        };
        finite_geodetic(LonLat::new(lon.to_degrees(), lat.to_degrees()))
    }
}
