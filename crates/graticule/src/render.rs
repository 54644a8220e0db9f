use foundation::math::Vec2;

use crate::labels::Edge;
use crate::style::{StrokeStyle, TextStyle};

/// Horizontal label alignment relative to the anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical label alignment relative to the anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Renderer boundary: the engine emits geometry and text, the host draws.
pub trait VectorSink {
    fn draw_polyline(&mut self, points: &[Vec2], style: &StrokeStyle);

    fn draw_label(
        &mut self,
        position: Vec2,
        text: &str,
        align: TextAlign,
        baseline: TextBaseline,
        style: &TextStyle,
    );
}

/// Alignment that keeps each edge's labels inside the viewport.
pub fn edge_alignment(edge: Edge) -> (TextAlign, TextBaseline) {
    match edge {
        Edge::Left => (TextAlign::Left, TextBaseline::Middle),
        Edge::Right => (TextAlign::Right, TextBaseline::Middle),
        Edge::Top => (TextAlign::Center, TextBaseline::Top),
        Edge::Bottom => (TextAlign::Center, TextBaseline::Bottom),
    }
}
