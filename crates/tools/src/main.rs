use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use foundation::bounds::Extent;
use foundation::math::Vec2;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use graticule::{Graticule, GraticuleConfig, GraticuleSnapshot, GridLine, ViewState, label_text};
use projection::{
    Equirectangular, Mollweide, PolarStereographic, Projection, Registry, WGS84_A,
};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = Options::parse(args)?;

    let registry = showcase_registry();
    let projection = registry
        .get(&options.code)
        .ok_or_else(|| format!("unknown projection code: {}\n\n{}", options.code, usage()))?;

    let config = GraticuleConfig {
        target_size: options.target_size,
        max_lines: options.max_lines,
        ..GraticuleConfig::default()
    };
    let mut engine = Graticule::new(config);
    engine.set_projection(&projection, &registry);

    let extent = options.extent.unwrap_or_else(|| projection.extent());
    let center = options.center.unwrap_or_else(|| {
        let c = extent.center();
        Vec2::new(c[0], c[1])
    });
    let view = ViewState::new(extent, center, options.resolution, 1.0);
    let snapshot = engine.rebuild(&view).clone();

    let collection = to_feature_collection(&snapshot, &projection);
    let payload = serde_json::to_string_pretty(&collection).map_err(|e| e.to_string())?;

    match &options.out {
        Some(path) => {
            fs::write(path, payload).map_err(|e| format!("write {}: {e}", path.display()))?
        }
        None => println!("{payload}"),
    }

    for event in engine.drain_events() {
        eprintln!("[{}] {}: {}", event.revision, event.kind, event.message);
    }
    Ok(())
}

struct Options {
    code: String,
    resolution: f64,
    extent: Option<Extent>,
    center: Option<Vec2>,
    target_size: f64,
    max_lines: u32,
    out: Option<PathBuf>,
}

impl Options {
    fn parse(args: Vec<String>) -> Result<Self, String> {
        if args.is_empty() {
            return Err(usage());
        }

        let mut code: Option<String> = None;
        let mut resolution: Option<f64> = None;
        let mut extent: Option<Extent> = None;
        let mut center: Option<Vec2> = None;
        let mut target_size = 100.0;
        let mut max_lines = 100u32;
        let mut out: Option<PathBuf> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--resolution" => {
                    resolution = Some(parse_float(&args, &mut i, "--resolution")?);
                }
                "--extent" => {
                    let minx = parse_float(&args, &mut i, "--extent")?;
                    let miny = parse_float(&args, &mut i, "--extent")?;
                    let maxx = parse_float(&args, &mut i, "--extent")?;
                    let maxy = parse_float(&args, &mut i, "--extent")?;
                    extent = Some(Extent::new([minx, miny], [maxx, maxy]));
                }
                "--center" => {
                    let x = parse_float(&args, &mut i, "--center")?;
                    let y = parse_float(&args, &mut i, "--center")?;
                    center = Some(Vec2::new(x, y));
                }
                "--target-size" => {
                    target_size = parse_float(&args, &mut i, "--target-size")?;
                }
                "--max-lines" => {
                    max_lines = parse_float(&args, &mut i, "--max-lines")? as u32;
                }
                "--out" => {
                    i += 1;
                    let value = args.get(i).ok_or("--out requires a path".to_string())?;
                    out = Some(PathBuf::from(value));
                }
                s if s.starts_with('-') => {
                    return Err(format!("unknown arg: {s}\n\n{}", usage()));
                }
                s => {
                    if code.is_some() {
                        return Err(format!("unexpected positional arg: {s}\n\n{}", usage()));
                    }
                    code = Some(s.to_string());
                }
            }
            i += 1;
        }

        Ok(Options {
            code: code.ok_or(usage())?,
            resolution: resolution.ok_or("--resolution is required".to_string())?,
            extent,
            center,
            target_size,
            max_lines,
            out,
        })
    }
}

fn parse_float(args: &[String], i: &mut usize, flag: &str) -> Result<f64, String> {
    *i += 1;
    let value = args
        .get(*i)
        .ok_or(format!("{flag} requires a numeric value"))?;
    value
        .parse::<f64>()
        .map_err(|e| format!("{flag}: bad number {value}: {e}"))
}

fn usage() -> String {
    [
        "usage: graticule-export <code> --resolution <units/px> [options]",
        "",
        "options:",
        "  --extent <minx> <miny> <maxx> <maxy>   visible extent (default: projection extent)",
        "  --center <x> <y>                       view center (default: extent center)",
        "  --target-size <px>                     grid spacing target (default 100)",
        "  --max-lines <n>                        walk cap per direction (default 100)",
        "  --out <file>                           write GeoJSON here instead of stdout",
        "",
        "codes: EPSG:4326, EPSG:3857, EPSG:32662, EPSG:32761, ESRI:53009",
    ]
    .join("\n")
}

/// The registry used by the exporter: the stock projections plus the
/// definition-bearing showcase set.
fn showcase_registry() -> Registry {
    let mut registry = Registry::with_defaults();

    let eqc_reach = (8_000_000.0 / WGS84_A).to_degrees();
    registry.register(
        Projection::new(
            "EPSG:32662",
            Extent::new([-8_000_000.0, -8_000_000.0], [8_000_000.0, 8_000_000.0]),
            Extent::new([-eqc_reach, -eqc_reach], [eqc_reach, eqc_reach]),
            Arc::new(Equirectangular::new(WGS84_A, 0.0)),
        )
        .with_definition(
            "+proj=eqc +lat_ts=0 +lat_0=0 +lon_0=0 +x_0=0 +y_0=0 +ellps=WGS84 +units=m",
        ),
    );

    registry.register(
        Projection::new(
            "EPSG:32761",
            Extent::new([-4_000_000.0, -4_000_000.0], [8_000_000.0, 8_000_000.0]),
            Extent::new([-180.0, -90.0], [180.0, -60.0]),
            Arc::new(PolarStereographic::south(
                WGS84_A,
                0.994,
                2_000_000.0,
                2_000_000.0,
            )),
        )
        .with_definition(
            "+proj=stere +lat_0=-90 +lat_ts=-90 +lon_0=0 +k=0.994 +x_0=2000000 +y_0=2000000",
        ),
    );

    let moll_half = 9_009_954.605_703_328;
    registry.register(
        Projection::new(
            "ESRI:53009",
            Extent::new([-moll_half, -moll_half], [moll_half, moll_half]),
            Extent::new([-179.0, -89.99], [179.0, 89.99]),
            Arc::new(Mollweide::new(6_371_000.0)),
        )
        .with_definition("+proj=moll +lon_0=0 +x_0=0 +y_0=0 +a=6371000 +b=6371000 +units=m"),
    );

    registry
}

fn to_feature_collection(snapshot: &GraticuleSnapshot, projection: &Projection) -> FeatureCollection {
    let mut features = Vec::new();

    features.push(multi_line_feature(&snapshot.meridians, "meridians"));
    features.push(multi_line_feature(&snapshot.parallels, "parallels"));

    let labels = snapshot
        .top_labels
        .iter()
        .chain(snapshot.bottom_labels.iter())
        .chain(snapshot.left_labels.iter())
        .chain(snapshot.right_labels.iter());
    for label in labels {
        let Some(text) = label_text(label.position, label.axis, projection.math()) else {
            continue;
        };
        let mut properties = JsonObject::new();
        properties.insert("text".to_string(), serde_json::Value::String(text));
        properties.insert(
            "edge".to_string(),
            serde_json::Value::String(label.edge.as_str().to_string()),
        );
        properties.insert(
            "axis".to_string(),
            serde_json::Value::String(label.axis.as_str().to_string()),
        );
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![
                label.position.x,
                label.position.y,
            ]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn multi_line_feature(lines: &[GridLine], kind: &str) -> Feature {
    let coordinates: Vec<Vec<Vec<f64>>> = lines
        .iter()
        .map(|line| line.points().iter().map(|p| vec![p.x, p.y]).collect())
        .collect();
    let mut properties = JsonObject::new();
    properties.insert(
        "kind".to_string(),
        serde_json::Value::String(kind.to_string()),
    );
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::MultiLineString(coordinates))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
