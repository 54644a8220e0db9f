use foundation::math::Vec2;
use projection::{LonLat, ProjectionMath};

/// Densifies meridian and parallel arcs into projected polylines.
///
/// Implementations return `None` when the arc cannot be projected; a single
/// bad arc drops that line, never the whole grid.
pub trait GeodesicSampler {
    /// Polyline for the meridian at `lon_deg` between `lat_range.0` and
    /// `lat_range.1`, accurate to `squared_tolerance` in projected units.
    fn meridian(
        &self,
        lon_deg: f64,
        lat_range: (f64, f64),
        math: &dyn ProjectionMath,
        squared_tolerance: f64,
    ) -> Option<Vec<Vec2>>;

    /// Polyline for the parallel at `lat_deg` between `lon_range.0` and
    /// `lon_range.1`.
    fn parallel(
        &self,
        lat_deg: f64,
        lon_range: (f64, f64),
        math: &dyn ProjectionMath,
        squared_tolerance: f64,
    ) -> Option<Vec<Vec2>>;
}

/// Default sampler: repeated midpoint bisection of the geodetic interval
/// until the projected midpoint deviates from the chord midpoint by less
/// than the tolerance.
#[derive(Debug, Copy, Clone)]
pub struct BisectionSampler {
    /// Hard cap on subdivision depth per segment; bounds the point count
    /// near projection singularities.
    pub max_depth: u32,
}

impl Default for BisectionSampler {
    fn default() -> Self {
        Self { max_depth: 18 }
    }
}

impl BisectionSampler {
    fn line(
        &self,
        interpolate: &dyn Fn(f64) -> LonLat,
        math: &dyn ProjectionMath,
        squared_tolerance: f64,
    ) -> Option<Vec<Vec2>> {
        let start = math.forward(interpolate(0.0)).ok()?;
        let end = math.forward(interpolate(1.0)).ok()?;
        let mut points = vec![start];
        self.segment(
            interpolate,
            math,
            squared_tolerance,
            (0.0, start),
            (1.0, end),
            0,
            &mut points,
        )?;
        points.push(end);
        Some(points)
    }

    #[allow(clippy::too_many_arguments)]
    fn segment(
        &self,
        interpolate: &dyn Fn(f64) -> LonLat,
        math: &dyn ProjectionMath,
        squared_tolerance: f64,
        low: (f64, Vec2),
        high: (f64, Vec2),
        depth: u32,
        out: &mut Vec<Vec2>,
    ) -> Option<()> {
        if depth >= self.max_depth {
            return Some(());
        }
        let t_mid = 0.5 * (low.0 + high.0);
        let projected_mid = math.forward(interpolate(t_mid)).ok()?;
        let chord_mid = (low.1 + high.1) * 0.5;
        if projected_mid.distance_squared(chord_mid) <= squared_tolerance {
            return Some(());
        }
        self.segment(
            interpolate,
            math,
            squared_tolerance,
            low,
            (t_mid, projected_mid),
            depth + 1,
            out,
        )?;
        out.push(projected_mid);
        self.segment(
            interpolate,
            math,
            squared_tolerance,
            (t_mid, projected_mid),
            high,
            depth + 1,
            out,
        )?;
        Some(())
    }
}

impl GeodesicSampler for BisectionSampler {
    fn meridian(
        &self,
        lon_deg: f64,
        lat_range: (f64, f64),
        math: &dyn ProjectionMath,
        squared_tolerance: f64,
    ) -> Option<Vec<Vec2>> {
        let (lat0, lat1) = lat_range;
        let interpolate = move |t: f64| LonLat::new(lon_deg, lat0 + t * (lat1 - lat0));
        self.line(&interpolate, math, squared_tolerance)
    }

    fn parallel(
        &self,
        lat_deg: f64,
        lon_range: (f64, f64),
        math: &dyn ProjectionMath,
        squared_tolerance: f64,
    ) -> Option<Vec<Vec2>> {
        let (lon0, lon1) = lon_range;
        let interpolate = move |t: f64| LonLat::new(lon0 + t * (lon1 - lon0), lat_deg);
        self.line(&interpolate, math, squared_tolerance)
    }
}
