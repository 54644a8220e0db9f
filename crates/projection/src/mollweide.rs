//! Spherical Mollweide projection.
//!
//!   forward: solve 2θ + sin 2θ = π·sin φ, then
//!            x = (2√2/π)·R·λ·cos θ, y = √2·R·sin θ
//!   inverse: θ = asin(y/(√2·R)), φ = asin((2θ + sin 2θ)/π),
//!            λ = π·x/(2√2·R·cos θ)

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use foundation::math::Vec2;

use crate::error::TransformError;
use crate::math::{LonLat, ProjectionMath, finite_geodetic, finite_projected};

const MAX_ITERATIONS: u32 = 25;
const TOLERANCE: f64 = 1e-12;

#[derive(Debug, Copy, Clone)]
pub struct Mollweide {
    radius: f64,
}

impl Mollweide {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    fn auxiliary_angle(lat_rad: f64) -> Result<f64, TransformError> {
        // The Newton step degenerates at the poles where the derivative
        // vanishes; the solution there is θ = ±π/2.
        if (FRAC_PI_2 - lat_rad.abs()).abs() < 1e-10 {
            return Ok(FRAC_PI_2.copysign(lat_rad));
        }
        let target = PI * lat_rad.sin();
        let mut theta = lat_rad;
        for _ in 0..MAX_ITERATIONS {
            let f = 2.0 * theta + (2.0 * theta).sin() - target;
            let df = 2.0 + 2.0 * (2.0 * theta).cos();
            let delta = f / df;
            theta -= delta;
            if delta.abs() < TOLERANCE {
                return Ok(theta);
            }
        }
        Err(TransformError::NotConverged {
            iterations: MAX_ITERATIONS,
        })
    }
}

impl Default for Mollweide {
    fn default() -> Self {
        // Authalic sphere radius commonly used with this projection.
        Self::new(6_371_000.0)
    }
}

impl ProjectionMath for Mollweide {
    fn forward(&self, ll: LonLat) -> Result<Vec2, TransformError> {
        let ll = finite_geodetic(ll)?;
        let theta = Self::auxiliary_angle(ll.lat_deg.to_radians())?;
        let x = 2.0 * SQRT_2 / PI * self.radius * ll.lon_deg.to_radians() * theta.cos();
        let y = SQRT_2 * self.radius * theta.sin();
        finite_projected(Vec2::new(x, y))
    }

    fn inverse(&self, p: Vec2) -> Result<LonLat, TransformError> {
        let p = finite_projected(p)?;
        let st = p.y / (SQRT_2 * self.radius);
        if st.abs() > 1.0 + 1e-9 {
            return Err(TransformError::OutOfDomain {
                axis: "y",
                value: p.y,
            });
        }
        let theta = st.clamp(-1.0, 1.0).asin();
        let lat = (((2.0 * theta + (2.0 * theta).sin()) / PI).clamp(-1.0, 1.0)).asin();
        let cos_theta = theta.cos();
        let lon = if cos_theta.abs() < 1e-12 {
            // Both poles collapse to a point; any longitude maps there.
            0.0
        } else {
            PI * p.x / (2.0 * SQRT_2 * self.radius * cos_theta)
        };
        finite_geodetic(LonLat::new(lon.to_degrees(), lat.to_degrees()))
    }
}
