use projection::{DefinitionSource, ProjectionFamily};
use serde::{Deserialize, Serialize};

use crate::mode::GenerationMode;

/// Classifier configuration.
///
/// `definitions_enabled` gates the parameter-definition lookup. With it off
/// only the direct-transform fallback is consulted, mirroring a host that
/// ships no definition table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub definitions_enabled: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            definitions_enabled: true,
        }
    }
}

/// Decide how grid lines for the projection `code` can be generated.
///
/// Plain geodetic, equidistant-cylindrical and Mercator grids are straight
/// in projected space and take the 2-point fast path. Stereographic,
/// cylindrical equal-area and equidistant-conic grids are disabled: curved
/// generation is unusable there (unstable or far too expensive) and the
/// straight approximation is wrong. Every other family, including unknown
/// ones, gets the curved path.
pub fn classify(
    code: &str,
    source: &dyn DefinitionSource,
    config: &ClassifierConfig,
) -> GenerationMode {
    if config.definitions_enabled
        && let Some(definition) = source.definition(code)
    {
        return match ProjectionFamily::from_definition(&definition) {
            ProjectionFamily::LonLat
            | ProjectionFamily::Equirectangular
            | ProjectionFamily::Mercator => GenerationMode::Line,
            ProjectionFamily::Stereographic
            | ProjectionFamily::CylindricalEqualArea
            | ProjectionFamily::EquidistantConic => GenerationMode::None,
            _ => GenerationMode::Default,
        };
    }
    // No definition: the stock projections all keep meridians and parallels
    // straight; anything else gets the conservative curved path.
    if source.has_direct_geodetic_transform(code) {
        GenerationMode::Line
    } else {
        GenerationMode::Default
    }
}
