use std::collections::HashMap;
use std::sync::Arc;

use foundation::bounds::Extent;
use foundation::math::Vec2;

use crate::error::TransformError;
use crate::math::{LonLat, ProjectionMath};
use crate::plate_carree::PlateCarree;
use crate::web_mercator::{WEB_MERCATOR_HALF_WORLD, WEB_MERCATOR_MAX_LAT_DEG, WebMercator};

/// A registered map projection: identity, extents and transform bindings.
///
/// The projected extent is the valid rectangle in map units; the world
/// extent is the geodetic rectangle (degrees) the projection covers. The
/// definition, when present, is a proj-style parameter string.
pub struct Projection {
    code: String,
    extent: Extent,
    world_extent: Extent,
    definition: Option<String>,
    direct_geodetic: bool,
    math: Arc<dyn ProjectionMath>,
}

impl Projection {
    pub fn new(
        code: impl Into<String>,
        extent: Extent,
        world_extent: Extent,
        math: Arc<dyn ProjectionMath>,
    ) -> Self {
        Self {
            code: code.into(),
            extent,
            world_extent,
            definition: None,
            direct_geodetic: false,
            math,
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Mark the projection as having a registered transform straight to
    /// geodetic coordinates (the stock projections).
    pub fn with_direct_geodetic(mut self) -> Self {
        self.direct_geodetic = true;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn world_extent(&self) -> Extent {
        self.world_extent
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    pub fn has_direct_geodetic_transform(&self) -> bool {
        self.direct_geodetic
    }

    pub fn math(&self) -> &dyn ProjectionMath {
        self.math.as_ref()
    }

    pub fn forward(&self, ll: LonLat) -> Result<Vec2, TransformError> {
        self.math.forward(ll)
    }

    pub fn inverse(&self, p: Vec2) -> Result<LonLat, TransformError> {
        self.math.inverse(p)
    }

    /// Equivalence for cache invalidation: same code, same parameters.
    /// Two instances of the same registration compare equivalent.
    pub fn equivalent(&self, other: &Projection) -> bool {
        self.code == other.code && self.definition == other.definition
    }
}

impl std::fmt::Debug for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projection")
            .field("code", &self.code)
            .field("extent", &self.extent)
            .field("world_extent", &self.world_extent)
            .field("definition", &self.definition)
            .field("direct_geodetic", &self.direct_geodetic)
            .finish()
    }
}

/// Lookup seam consumed by the generation-mode classifier.
pub trait DefinitionSource {
    /// Parameter definition for `code`, when one was registered.
    fn definition(&self, code: &str) -> Option<String>;

    /// Whether a direct transform path from `code` to geodetic coordinates
    /// is registered.
    fn has_direct_geodetic_transform(&self, code: &str) -> bool;
}

/// Projection registry, keyed by code.
#[derive(Debug, Default)]
pub struct Registry {
    projections: HashMap<String, Arc<Projection>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            projections: HashMap::new(),
        }
    }

    /// Registry primed with the stock projections. These carry no parameter
    /// definition but do have a direct geodetic transform path.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            Projection::new(
                "EPSG:4326",
                Extent::new([-180.0, -90.0], [180.0, 90.0]),
                Extent::new([-180.0, -90.0], [180.0, 90.0]),
                Arc::new(PlateCarree),
            )
            .with_direct_geodetic(),
        );
        registry.register(
            Projection::new(
                "EPSG:3857",
                Extent::new(
                    [-WEB_MERCATOR_HALF_WORLD, -WEB_MERCATOR_HALF_WORLD],
                    [WEB_MERCATOR_HALF_WORLD, WEB_MERCATOR_HALF_WORLD],
                ),
                Extent::new(
                    [-180.0, -WEB_MERCATOR_MAX_LAT_DEG],
                    [180.0, WEB_MERCATOR_MAX_LAT_DEG],
                ),
                Arc::new(WebMercator::default()),
            )
            .with_direct_geodetic(),
        );
        registry
    }

    pub fn register(&mut self, projection: Projection) -> Arc<Projection> {
        let projection = Arc::new(projection);
        self.projections
            .insert(projection.code().to_string(), projection.clone());
        projection
    }

    pub fn get(&self, code: &str) -> Option<Arc<Projection>> {
        self.projections.get(code).cloned()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.projections.keys().map(String::as_str)
    }
}

impl DefinitionSource for Registry {
    fn definition(&self, code: &str) -> Option<String> {
        self.projections
            .get(code)
            .and_then(|p| p.definition().map(str::to_string))
    }

    fn has_direct_geodetic_transform(&self, code: &str) -> bool {
        self.projections
            .get(code)
            .map(|p| p.has_direct_geodetic_transform())
            .unwrap_or(false)
    }
}
