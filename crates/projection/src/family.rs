/// Projection family, read from the `+proj=` token of a parameter
/// definition string.
///
/// Closed set: families the grid engine knows how to treat, plus `Unknown`
/// for everything else. Further definition parsing stays outside this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProjectionFamily {
    LonLat,
    Equirectangular,
    Mercator,
    Stereographic,
    CylindricalEqualArea,
    EquidistantConic,
    Mollweide,
    LambertAzimuthalEqualArea,
    Sinusoidal,
    Unknown,
}

impl ProjectionFamily {
    /// Map a `+proj=` token to a family.
    pub fn from_token(token: &str) -> Self {
        match token {
            "longlat" | "latlong" | "lonlat" => ProjectionFamily::LonLat,
            "eqc" => ProjectionFamily::Equirectangular,
            "merc" | "webmerc" => ProjectionFamily::Mercator,
            "stere" => ProjectionFamily::Stereographic,
            "cea" => ProjectionFamily::CylindricalEqualArea,
            "eqdc" => ProjectionFamily::EquidistantConic,
            "moll" => ProjectionFamily::Mollweide,
            "laea" => ProjectionFamily::LambertAzimuthalEqualArea,
            "sinu" => ProjectionFamily::Sinusoidal,
            _ => ProjectionFamily::Unknown,
        }
    }

    /// Extract the family from a proj-style definition string such as
    /// `"+proj=moll +lon_0=0 +x_0=0 +y_0=0 +a=6371000"`.
    pub fn from_definition(definition: &str) -> Self {
        for part in definition.split_whitespace() {
            if let Some(token) = part.strip_prefix("+proj=") {
                return Self::from_token(token);
            }
        }
        ProjectionFamily::Unknown
    }
}
