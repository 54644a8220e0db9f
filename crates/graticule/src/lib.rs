//! Adaptive coordinate grid ("graticule") generation for projected map
//! views.
//!
//! On every view change the engine picks a grid spacing in degrees, builds
//! meridian and parallel geometries in projected coordinates (2-point
//! straight lines where the projection permits, densified curves otherwise)
//! and derives edge label anchors. All outputs are rebuilt per call; only
//! projection-derived quantities are cached, keyed by projection
//! equivalence.

pub mod builder;
pub mod classifier;
pub mod events;
pub mod geodesic;
pub mod intervals;
pub mod labels;
pub mod lifecycle;
pub mod mode;
pub mod render;
pub mod style;
pub mod view;

pub use builder::*;
pub use classifier::*;
pub use events::*;
pub use geodesic::*;
pub use intervals::*;
pub use labels::*;
pub use lifecycle::*;
pub use mode::*;
pub use render::*;
pub use style::*;
pub use view::*;
