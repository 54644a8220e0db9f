use foundation::math::{Vec2, canonical_zero, normalize_longitude};
use projection::ProjectionMath;

/// Which coordinate a label reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelAxis {
    Longitude,
    Latitude,
}

impl LabelAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelAxis::Longitude => "longitude",
            LabelAxis::Latitude => "latitude",
        }
    }
}

/// Screen edge a label is anchored to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// A label anchor in projected coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelPoint {
    pub position: Vec2,
    pub edge: Edge,
    pub axis: LabelAxis,
}

/// Format a geodetic degree value for display.
///
/// The value wraps into [-180, 180), is rounded to 6 decimals, and the
/// antimeridian always reads +180. Trailing zeros are not printed.
/// Latitudes are within the wrap range already and pass through unchanged.
pub fn format_degrees(value_deg: f64) -> String {
    let wrapped = normalize_longitude(value_deg);
    let mut v = (wrapped * 1e6).round() / 1e6;
    if v == -180.0 {
        v = 180.0;
    }
    format!("{}°", canonical_zero(v))
}

/// Inverse-transform a label anchor and format the coordinate on `axis`.
///
/// `None` when the anchor does not inverse-transform; the caller skips the
/// label rather than failing the frame.
pub fn label_text(position: Vec2, axis: LabelAxis, math: &dyn ProjectionMath) -> Option<String> {
    let ll = math.inverse(position).ok()?;
    let value = match axis {
        LabelAxis::Longitude => ll.lon_deg,
        LabelAxis::Latitude => ll.lat_deg,
    };
    Some(format_degrees(value))
}

#[cfg(test)]
mod tests {
    use super::{LabelAxis, format_degrees, label_text};
    use projection::{PlateCarree, Vec2, WebMercator};

    #[test]
    fn antimeridian_reads_plus_180_from_both_sides() {
        assert_eq!(format_degrees(180.0), "180°");
        assert_eq!(format_degrees(-180.0), "180°");
        assert_eq!(format_degrees(540.0), "180°");
    }

    #[test]
    fn wraps_longitudes_beyond_a_world() {
        assert_eq!(format_degrees(190.0), "-170°");
        assert_eq!(format_degrees(-190.0), "170°");
        assert_eq!(format_degrees(720.0), "0°");
    }

    #[test]
    fn latitudes_pass_through() {
        assert_eq!(format_degrees(45.0), "45°");
        assert_eq!(format_degrees(-89.9), "-89.9°");
        assert_eq!(format_degrees(0.0), "0°");
    }

    #[test]
    fn rounds_to_six_decimals_and_trims() {
        assert_eq!(format_degrees(12.3456789), "12.345679°");
        assert_eq!(format_degrees(10.5), "10.5°");
        assert_eq!(format_degrees(10.000000), "10°");
        assert_eq!(format_degrees(-0.0000001), "0°");
    }

    #[test]
    fn near_antimeridian_rounds_then_remaps() {
        assert_eq!(format_degrees(-179.99999999), "180°");
    }

    #[test]
    fn label_text_extracts_the_requested_axis() {
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(
            label_text(p, LabelAxis::Longitude, &PlateCarree).unwrap(),
            "10°"
        );
        assert_eq!(
            label_text(p, LabelAxis::Latitude, &PlateCarree).unwrap(),
            "20°"
        );
    }

    #[test]
    fn label_text_round_trips_web_mercator() {
        let m = WebMercator::default();
        use projection::{LonLat, ProjectionMath};
        let anchor = m.forward(LonLat::new(30.0, 0.0)).unwrap();
        assert_eq!(label_text(anchor, LabelAxis::Longitude, &m).unwrap(), "30°");
    }
}
