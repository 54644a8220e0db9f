use std::sync::Arc;

use foundation::bounds::Extent;
use foundation::math::{Vec2, snap_down, snap_up};
use projection::{DefinitionSource, LonLat, Projection};
use serde::{Deserialize, Serialize};

use crate::classifier::{ClassifierConfig, classify};
use crate::events::{Event, EventLog};
use crate::geodesic::{BisectionSampler, GeodesicSampler};
use crate::intervals::select_interval;
use crate::labels::{Edge, LabelAxis, LabelPoint, label_text};
use crate::lifecycle::ViewSource;
use crate::mode::GenerationMode;
use crate::render::{VectorSink, edge_alignment};
use crate::style::{StrokeStyle, TextStyle};
use crate::view::ViewState;

/// Engine configuration, set once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraticuleConfig {
    /// Desired on-screen spacing between neighboring grid lines, in pixels.
    pub target_size: f64,
    /// Cap on grid lines walked per direction and axis.
    pub max_lines: u32,
    pub stroke: StrokeStyle,
    pub text: TextStyle,
    pub classifier: ClassifierConfig,
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self {
            target_size: 100.0,
            max_lines: 100,
            stroke: StrokeStyle::default(),
            text: TextStyle::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// One meridian or parallel in projected coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    points: Vec<Vec2>,
    bbox: Extent,
}

impl GridLine {
    pub fn new(points: Vec<Vec2>) -> Self {
        let bbox = Extent::from_points(points.iter().map(|p| [p.x, p.y]));
        Self { points, bbox }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn bbox(&self) -> Extent {
        self.bbox
    }
}

/// Output of one rebuild. Each rebuild fully supersedes the previous
/// snapshot; nothing is patched in place.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GraticuleSnapshot {
    pub meridians: Vec<GridLine>,
    pub parallels: Vec<GridLine>,
    pub top_labels: Vec<LabelPoint>,
    pub bottom_labels: Vec<LabelPoint>,
    pub left_labels: Vec<LabelPoint>,
    pub right_labels: Vec<LabelPoint>,
}

impl GraticuleSnapshot {
    pub fn is_empty(&self) -> bool {
        self.meridians.is_empty()
            && self.parallels.is_empty()
            && self.top_labels.is_empty()
            && self.bottom_labels.is_empty()
            && self.left_labels.is_empty()
            && self.right_labels.is_empty()
    }
}

/// Quantities derived from the active projection, recomputed only when the
/// projection changes (by equivalence) and then replaced wholesale.
struct ProjectionInfo {
    projection: Arc<Projection>,
    mode: GenerationMode,
    /// Geodetic world bounds, degrees.
    world: Extent,
    /// World bounds forward-transformed into projected units.
    world_projected: Extent,
    /// Geodetic coordinates of the projected extent's center; the anchor
    /// for interval probing.
    center: LonLat,
}

impl ProjectionInfo {
    fn derive(
        projection: Arc<Projection>,
        source: &dyn DefinitionSource,
        config: &ClassifierConfig,
    ) -> Self {
        let mut mode = classify(projection.code(), source, config);
        let world = projection.world_extent();

        let mut world_projected = Extent::empty();
        for corner in [
            [world.min[0], world.min[1]],
            [world.min[0], world.max[1]],
            [world.max[0], world.min[1]],
            [world.max[0], world.max[1]],
        ] {
            match projection.forward(LonLat::new(corner[0], corner[1])) {
                Ok(p) => world_projected.include([p.x, p.y]),
                Err(_) => {
                    mode = GenerationMode::None;
                    break;
                }
            }
        }

        let projected_center = projection.extent().center();
        let center = match projection.inverse(Vec2::new(projected_center[0], projected_center[1]))
        {
            Ok(ll) => ll,
            Err(_) => {
                mode = GenerationMode::None;
                LonLat::new(0.0, 0.0)
            }
        };

        Self {
            projection,
            mode,
            world,
            world_projected,
            center,
        }
    }
}

/// The graticule engine.
///
/// Holds configuration, the projection-derived cache and the latest
/// snapshot. `rebuild` is invoked by the host on every view change; see
/// [`crate::lifecycle::ViewSource`] for the pull-based wiring.
pub struct Graticule {
    config: GraticuleConfig,
    sampler: Box<dyn GeodesicSampler>,
    info: Option<ProjectionInfo>,
    snapshot: GraticuleSnapshot,
    events: EventLog,
    revision: u64,
    pub(crate) view_source: Option<Box<dyn ViewSource>>,
}

impl Default for Graticule {
    fn default() -> Self {
        Self::new(GraticuleConfig::default())
    }
}

impl Graticule {
    pub fn new(config: GraticuleConfig) -> Self {
        Self::with_sampler(config, Box::new(BisectionSampler::default()))
    }

    pub fn with_sampler(config: GraticuleConfig, sampler: Box<dyn GeodesicSampler>) -> Self {
        Self {
            config,
            sampler,
            info: None,
            snapshot: GraticuleSnapshot::default(),
            events: EventLog::new(),
            revision: 0,
            view_source: None,
        }
    }

    pub fn config(&self) -> &GraticuleConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &GraticuleSnapshot {
        &self.snapshot
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Generation mode of the active projection.
    pub fn mode(&self) -> GenerationMode {
        self.info
            .as_ref()
            .map(|info| info.mode)
            .unwrap_or(GenerationMode::None)
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }

    /// Rebind projection-derived state when `projection` is not equivalent
    /// to the cached one. Returns whether a rebind happened.
    pub fn set_projection(
        &mut self,
        projection: &Arc<Projection>,
        source: &dyn DefinitionSource,
    ) -> bool {
        if let Some(info) = &self.info
            && info.projection.equivalent(projection)
        {
            return false;
        }
        let info = ProjectionInfo::derive(projection.clone(), source, &self.config.classifier);
        self.events.record(
            self.revision,
            "projection",
            format!("{} -> {:?}", projection.code(), info.mode),
        );
        self.info = Some(info);
        true
    }

    /// Recompute the grid for `view`. The returned snapshot fully replaces
    /// the previous one; degenerate input degrades to an empty snapshot.
    pub fn rebuild(&mut self, view: &ViewState) -> &GraticuleSnapshot {
        self.revision += 1;
        let snapshot = self.compute(view);
        self.events.record(
            self.revision,
            "rebuild",
            format!(
                "{} meridians, {} parallels",
                snapshot.meridians.len(),
                snapshot.parallels.len()
            ),
        );
        self.snapshot = snapshot;
        &self.snapshot
    }

    /// Emit the current snapshot through the renderer boundary, formatting
    /// labels on the way out.
    pub fn draw(&self, sink: &mut dyn VectorSink) {
        let Some(info) = &self.info else {
            return;
        };
        if !info.mode.is_enabled() {
            return;
        }
        for line in self
            .snapshot
            .meridians
            .iter()
            .chain(self.snapshot.parallels.iter())
        {
            sink.draw_polyline(line.points(), &self.config.stroke);
        }
        let labels = self
            .snapshot
            .left_labels
            .iter()
            .chain(self.snapshot.right_labels.iter())
            .chain(self.snapshot.top_labels.iter())
            .chain(self.snapshot.bottom_labels.iter());
        for label in labels {
            let Some(text) = label_text(label.position, label.axis, info.projection.math()) else {
                continue;
            };
            let (align, baseline) = edge_alignment(label.edge);
            sink.draw_label(label.position, &text, align, baseline, &self.config.text);
        }
    }

    fn compute(&self, view: &ViewState) -> GraticuleSnapshot {
        let Some(info) = &self.info else {
            return GraticuleSnapshot::default();
        };
        if !info.mode.is_enabled() {
            return GraticuleSnapshot::default();
        }
        let selected = select_interval(
            info.center,
            view.resolution,
            self.config.target_size,
            |ll| info.projection.forward(ll),
        );
        let Some(interval) = selected else {
            return GraticuleSnapshot::default();
        };
        match info.mode {
            GenerationMode::Line => self.build_straight(info, view, interval),
            _ => self.build_curved(info, view, interval, view.squared_tolerance()),
        }
    }

    /// Fast path: meridians and parallels are straight in projected space,
    /// so each line is two points spanning the visible extent, with labels
    /// pinned to the extent edges.
    fn build_straight(
        &self,
        info: &ProjectionInfo,
        view: &ViewState,
        interval: f64,
    ) -> GraticuleSnapshot {
        let projection = &info.projection;
        let extent = view.extent;
        let mut out = GraticuleSnapshot::default();

        let Ok(center) = projection.inverse(view.center) else {
            return out;
        };

        // Visible geodetic ranges, read off the extent edges through the
        // view center, snapped outward to interval multiples.
        let lon_range = (
            projection.inverse(Vec2::new(extent.min[0], view.center.y)),
            projection.inverse(Vec2::new(extent.max[0], view.center.y)),
        );
        let lat_range = (
            projection.inverse(Vec2::new(view.center.x, extent.min[1])),
            projection.inverse(Vec2::new(view.center.x, extent.max[1])),
        );
        let ((Ok(low_lon), Ok(high_lon)), (Ok(low_lat), Ok(high_lat))) = (lon_range, lat_range)
        else {
            return out;
        };

        let min_lon = snap_down(low_lon.lon_deg, interval);
        let max_lon = snap_up(high_lon.lon_deg, interval);
        let min_lat = snap_down(low_lat.lat_deg, interval);
        let max_lat = snap_up(high_lat.lat_deg, interval);

        let cap = self.config.max_lines as usize * 2 + 1;

        let mut lon = min_lon;
        while lon <= max_lon && out.meridians.len() < cap {
            if let Ok(p) = projection.forward(LonLat::new(lon, center.lat_deg)) {
                out.meridians.push(GridLine::new(vec![
                    Vec2::new(p.x, extent.min[1]),
                    Vec2::new(p.x, extent.max[1]),
                ]));
                out.top_labels.push(LabelPoint {
                    position: Vec2::new(p.x, extent.max[1]),
                    edge: Edge::Top,
                    axis: LabelAxis::Longitude,
                });
                out.bottom_labels.push(LabelPoint {
                    position: Vec2::new(p.x, extent.min[1]),
                    edge: Edge::Bottom,
                    axis: LabelAxis::Longitude,
                });
            }
            lon += interval;
        }

        let mut lat = min_lat;
        while lat <= max_lat && out.parallels.len() < cap {
            if let Ok(p) = projection.forward(LonLat::new(center.lon_deg, lat)) {
                out.parallels.push(GridLine::new(vec![
                    Vec2::new(extent.min[0], p.y),
                    Vec2::new(extent.max[0], p.y),
                ]));
                out.left_labels.push(LabelPoint {
                    position: Vec2::new(extent.min[0], p.y),
                    edge: Edge::Left,
                    axis: LabelAxis::Latitude,
                });
                out.right_labels.push(LabelPoint {
                    position: Vec2::new(extent.max[0], p.y),
                    edge: Edge::Right,
                    axis: LabelAxis::Latitude,
                });
            }
            lat += interval;
        }

        out
    }

    /// Curved path: walk outward from the snapped center on each axis,
    /// densify every line geodesically and keep those whose bounding box
    /// touches the visible extent. No labels here; curved lines have no
    /// single well-defined edge anchor.
    fn build_curved(
        &self,
        info: &ProjectionInfo,
        view: &ViewState,
        interval: f64,
        squared_tolerance: f64,
    ) -> GraticuleSnapshot {
        let projection = &info.projection;
        let world = info.world;
        let mut out = GraticuleSnapshot::default();

        let Ok(center) = projection.inverse(view.center) else {
            return out;
        };

        // Extents beyond the projected world are invalid input; clamp, do
        // not trust.
        let valid = view.extent.intersection(&info.world_projected);
        if valid.is_empty() {
            return out;
        }
        let Some(window) = geodetic_window(projection, &valid) else {
            return out;
        };
        let window = window.intersection(&world);
        let (min_lat, max_lat) = (window.min[1], window.max[1]);
        // Parallels span the world's longitude range, not the window's: a
        // corner-derived window understates longitude badly where the world
        // outline pinches toward the poles. Culling trims the excess.
        let (min_lon, max_lon) = (world.min[0], world.max[0]);

        let max_lines = self.config.max_lines;

        let start_lon = snap_down(center.lon_deg, interval).clamp(world.min[0], world.max[0]);
        self.add_meridian(&mut out, info, start_lon, (min_lat, max_lat), squared_tolerance, &view.extent);
        let mut lon = start_lon;
        let mut count = 0;
        while lon != world.min[0] && count < max_lines {
            lon = (lon - interval).max(world.min[0]);
            self.add_meridian(&mut out, info, lon, (min_lat, max_lat), squared_tolerance, &view.extent);
            count += 1;
        }
        let mut lon = start_lon;
        let mut count = 0;
        while lon != world.max[0] && count < max_lines {
            lon = (lon + interval).min(world.max[0]);
            self.add_meridian(&mut out, info, lon, (min_lat, max_lat), squared_tolerance, &view.extent);
            count += 1;
        }

        let start_lat = snap_down(center.lat_deg, interval).clamp(world.min[1], world.max[1]);
        self.add_parallel(&mut out, info, start_lat, (min_lon, max_lon), squared_tolerance, &view.extent);
        let mut lat = start_lat;
        let mut count = 0;
        while lat != world.min[1] && count < max_lines {
            lat = (lat - interval).max(world.min[1]);
            self.add_parallel(&mut out, info, lat, (min_lon, max_lon), squared_tolerance, &view.extent);
            count += 1;
        }
        let mut lat = start_lat;
        let mut count = 0;
        while lat != world.max[1] && count < max_lines {
            lat = (lat + interval).min(world.max[1]);
            self.add_parallel(&mut out, info, lat, (min_lon, max_lon), squared_tolerance, &view.extent);
            count += 1;
        }

        out
    }

    fn add_meridian(
        &self,
        out: &mut GraticuleSnapshot,
        info: &ProjectionInfo,
        lon: f64,
        lat_range: (f64, f64),
        squared_tolerance: f64,
        extent: &Extent,
    ) {
        let Some(points) =
            self.sampler
                .meridian(lon, lat_range, info.projection.math(), squared_tolerance)
        else {
            return;
        };
        let line = GridLine::new(points);
        if line.bbox().intersects(extent) {
            out.meridians.push(line);
        }
    }

    fn add_parallel(
        &self,
        out: &mut GraticuleSnapshot,
        info: &ProjectionInfo,
        lat: f64,
        lon_range: (f64, f64),
        squared_tolerance: f64,
        extent: &Extent,
    ) {
        let Some(points) =
            self.sampler
                .parallel(lat, lon_range, info.projection.math(), squared_tolerance)
        else {
            return;
        };
        let line = GridLine::new(points);
        if line.bbox().intersects(extent) {
            out.parallels.push(line);
        }
    }
}

/// Geodetic bounding box of a projected extent: inverse-transform the four
/// corners and take the componentwise range.
fn geodetic_window(projection: &Projection, extent: &Extent) -> Option<Extent> {
    let mut window = Extent::empty();
    for corner in [
        [extent.min[0], extent.min[1]],
        [extent.min[0], extent.max[1]],
        [extent.max[0], extent.min[1]],
        [extent.max[0], extent.max[1]],
    ] {
        let ll = projection.inverse(Vec2::new(corner[0], corner[1])).ok()?;
        window.include([ll.lon_deg, ll.lat_deg]);
    }
    Some(window)
}
