use serde::{Deserialize, Serialize};

/// Stroke appearance for grid lines. Opaque to the engine; handed to the
/// renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// RGBA, 0..=1 per channel.
    pub color: [f32; 4],
    pub width_px: f32,
    /// Dash pattern in pixels; empty means solid.
    pub line_dash: Vec<f32>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 0.2],
            width_px: 1.0,
            line_dash: Vec::new(),
        }
    }
}

/// Text appearance for edge labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: String,
    pub color: [f32; 4],
    pub halo_color: [f32; 4],
    pub halo_width_px: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "normal 12px Arial".to_string(),
            color: [0.0, 0.0, 0.0, 1.0],
            halo_color: [1.0, 1.0, 1.0, 0.5],
            halo_width_px: 2.0,
        }
    }
}
