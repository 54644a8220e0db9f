pub mod equirectangular;
pub mod error;
pub mod family;
pub mod math;
pub mod mollweide;
pub mod plate_carree;
pub mod polar_stereographic;
pub mod registry;
pub mod web_mercator;

pub use equirectangular::*;
pub use error::*;
pub use family::*;
pub use math::*;
pub use mollweide::*;
pub use plate_carree::*;
pub use polar_stereographic::*;
pub use registry::*;
pub use web_mercator::*;
