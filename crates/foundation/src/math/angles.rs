//! Angular arithmetic in degrees.

/// Wrap a degree value into `[-180, 180)`.
///
/// The antimeridian itself maps to `-180`; callers that want the `+180`
/// representation remap it after rounding.
pub fn normalize_longitude(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0 + 180.0) % 360.0 - 180.0
}

/// Largest multiple of `step` not greater than `v`.
pub fn snap_down(v: f64, step: f64) -> f64 {
    (v / step).floor() * step
}

/// Smallest multiple of `step` not less than `v`.
pub fn snap_up(v: f64, step: f64) -> f64 {
    (v / step).ceil() * step
}

/// Fold `-0.0` into `0.0` so formatted output never reads "-0".
pub fn canonical_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

#[cfg(test)]
mod tests {
    use super::{canonical_zero, normalize_longitude, snap_down, snap_up};

    #[test]
    fn wraps_into_half_open_range() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(170.0), 170.0);
        assert_eq!(normalize_longitude(180.0), -180.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(540.0), -180.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(720.0), 0.0);
    }

    #[test]
    fn latitude_sized_values_pass_through() {
        assert_eq!(normalize_longitude(89.5), 89.5);
        assert_eq!(normalize_longitude(-89.5), -89.5);
        // Not exactly representable; the wrap arithmetic leaves float dust.
        assert!((normalize_longitude(-89.9) + 89.9).abs() < 1e-12);
    }

    #[test]
    fn snapping() {
        assert_eq!(snap_down(17.0, 10.0), 10.0);
        assert_eq!(snap_down(-95.0, 10.0), -100.0);
        assert_eq!(snap_down(20.0, 10.0), 20.0);
        assert_eq!(snap_up(17.0, 10.0), 20.0);
        assert_eq!(snap_up(-95.0, 10.0), -90.0);
        assert_eq!(snap_up(20.0, 10.0), 20.0);
    }

    #[test]
    fn canonical_zero_folds_negative_zero() {
        assert_eq!(canonical_zero(-0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(canonical_zero(1.5), 1.5);
        assert_eq!(canonical_zero(-1.5), -1.5);
    }
}
