use foundation::math::Vec2;
use projection::{LonLat, TransformError};

/// Candidate grid spacings in degrees, coarsest first.
pub const INTERVALS: [f64; 16] = [
    90.0, 45.0, 30.0, 20.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.01, 0.005, 0.002, 0.001,
];

/// Pick the coarsest spacing that still keeps neighboring grid lines more
/// than `target_size` pixels apart around `center`.
///
/// Walks the candidate table from coarse to fine. Each candidate projects
/// two probe points offset by half the candidate on both axes; the walk
/// stops at the first candidate whose projected squared span no longer
/// exceeds `(target_size · resolution)²`, and the previously accepted
/// candidate wins. A span exactly equal to the target stops the walk too.
/// `None` means even 90° is too dense on screen and generation is disabled.
///
/// Must be re-run whenever resolution or center change: the local distortion
/// of the projection moves with the view.
pub fn select_interval<F>(center: LonLat, resolution: f64, target_size: f64, forward: F) -> Option<f64>
where
    F: Fn(LonLat) -> Result<Vec2, TransformError>,
{
    if !resolution.is_finite() || resolution <= 0.0 {
        return None;
    }
    let target = (target_size * resolution).powi(2);
    let mut selected = None;
    for candidate in INTERVALS {
        let delta = candidate / 2.0;
        let low = forward(LonLat::new(center.lon_deg - delta, center.lat_deg - delta));
        let high = forward(LonLat::new(center.lon_deg + delta, center.lat_deg + delta));
        let span = match (low, high) {
            (Ok(a), Ok(b)) => a.distance_squared(b),
            // Keep the last spacing that projected cleanly.
            _ => break,
        };
        if !span.is_finite() || span <= target {
            break;
        }
        selected = Some(candidate);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::{INTERVALS, select_interval};
    use projection::{LonLat, PlateCarree, ProjectionMath, TransformError, Vec2};

    fn identity(ll: LonLat) -> Result<Vec2, TransformError> {
        PlateCarree.forward(ll)
    }

    #[test]
    fn table_is_strictly_descending() {
        for pair in INTERVALS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn selects_the_finest_interval_that_stays_sparse() {
        // Probe span for candidate i is 2·i² under the identity transform;
        // target is (100·0.1)² = 100, so 10° (span 200) is the last winner.
        let selected = select_interval(LonLat::new(0.0, 0.0), 0.1, 100.0, identity);
        assert_eq!(selected, Some(10.0));
    }

    #[test]
    fn monotonic_in_resolution() {
        let center = LonLat::new(0.0, 0.0);
        let mut previous = Some(0.0);
        for resolution in [1e-5, 1e-4, 1e-3, 1e-2, 0.1, 0.3, 1.0, 3.0, 10.0] {
            let selected = select_interval(center, resolution, 100.0, identity);
            match (previous, selected) {
                (Some(p), Some(s)) => assert!(s >= p, "interval shrank while zooming out"),
                (None, Some(_)) => panic!("re-enabled after being disabled"),
                _ => {}
            }
            previous = selected;
        }
    }

    #[test]
    fn zoomed_far_out_is_disabled() {
        assert_eq!(select_interval(LonLat::new(0.0, 0.0), 1000.0, 100.0, identity), None);
        assert_eq!(select_interval(LonLat::new(0.0, 0.0), 10.0, 100.0, identity), None);
    }

    #[test]
    fn degenerate_resolution_is_disabled() {
        assert_eq!(select_interval(LonLat::new(0.0, 0.0), 0.0, 100.0, identity), None);
        assert_eq!(select_interval(LonLat::new(0.0, 0.0), -1.0, 100.0, identity), None);
        assert_eq!(select_interval(LonLat::new(0.0, 0.0), f64::NAN, 100.0, identity), None);
    }

    #[test]
    fn boundary_candidate_is_excluded() {
        // Collapse the y axis so the probe span for candidate i is exactly
        // i², representable in binary. With target (100·0.05)² = 25 the 5°
        // candidate hits the target exactly and must not be accepted.
        let collapse = |ll: LonLat| Ok(Vec2::new(ll.lon_deg, 0.0));
        let selected = select_interval(LonLat::new(0.0, 0.0), 0.05, 100.0, collapse);
        assert_eq!(selected, Some(10.0));
    }

    #[test]
    fn failing_transform_keeps_last_clean_candidate() {
        // Probes tighter than ±2.5° fail; the walk stops there instead of
        // refining further.
        let flaky = |ll: LonLat| {
            if ll.lon_deg.abs() < 2.5 {
                Err(TransformError::NonFinite)
            } else {
                Ok(Vec2::new(ll.lon_deg, ll.lat_deg))
            }
        };
        let selected = select_interval(LonLat::new(0.0, 0.0), 0.001, 100.0, flaky);
        assert_eq!(selected, Some(5.0));
    }
}
