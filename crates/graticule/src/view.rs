use foundation::bounds::Extent;
use foundation::math::Vec2;

/// Per-frame view input, supplied fresh on every recomputation and not
/// retained across calls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    /// Visible extent in projected units.
    pub extent: Extent,
    /// View center in projected units.
    pub center: Vec2,
    /// Projected units per pixel.
    pub resolution: f64,
    /// Device pixel ratio; scales the densification tolerance.
    pub pixel_ratio: f64,
}

impl ViewState {
    pub fn new(extent: Extent, center: Vec2, resolution: f64, pixel_ratio: f64) -> Self {
        Self {
            extent,
            center,
            resolution,
            pixel_ratio,
        }
    }

    /// Squared deviation allowance for curve densification at this view:
    /// a quarter pixel, expressed in projected units.
    pub fn squared_tolerance(&self) -> f64 {
        self.resolution * self.resolution / (4.0 * self.pixel_ratio * self.pixel_ratio)
    }
}
