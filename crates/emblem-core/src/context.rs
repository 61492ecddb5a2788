//! Normalized rendering context.
//!
//! Wraps a [`Surface`] and exposes the primitive drawing operations in a
//! fixed logical coordinate space: the origin at the visual center of the
//! surface, the shorter dimension spanning exactly two logical units, and
//! the y axis pointing up. Geometry is transformed to device space as it is
//! appended, and arcs are flattened to cubic Béziers with a fixed tolerance,
//! so every backend receives identical control points.

use std::f64::consts::TAU;

use kurbo::{Affine, Arc as KurboArc, BezPath, Point, Stroke, Vec2};

use crate::paint::{LineCap, LineJoin, Paint};
use crate::surface::{DevicePaint, Surface};

/// Flattening tolerance for arc segments, in logical units.
///
/// Device error stays proportional to the export size (one logical unit is
/// half the shorter surface dimension), so output remains visually
/// resolution-independent.
const ARC_TOLERANCE: f64 = 1e-4;

/// The graphics state captured by `save`/`restore`.
///
/// The in-progress path is deliberately not part of it: a drawable restores
/// its local transform before stroking so that line width is expressed in
/// surface units, and the path must survive that restore.
#[derive(Debug, Clone)]
struct GraphicsState {
    transform: Affine,
    source: DevicePaint,
    line_width: f64,
    line_join: LineJoin,
    line_cap: LineCap,
}

/// A drawing surface normalized to logical coordinates.
///
/// Created once per render pass and dropped (or finalized) when the pass
/// completes; never reused across surfaces.
pub struct Context<S: Surface> {
    surface: S,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    path: BezPath,
    current: Option<Point>,
    subpath_start: Option<Point>,
    /// Logical half-extent along x, `>= 1`; exceeds 1 when width is the
    /// longer dimension.
    width: f64,
    /// Logical half-extent along y.
    height: f64,
    device_width: f64,
    device_height: f64,
}

impl<S: Surface> Context<S> {
    /// Wrap a surface of the given device dimensions.
    ///
    /// Applies a uniform scale of `(size/2, -size/2)` with `size` the
    /// shorter dimension, then recenters the origin, so `(0, 0)` maps to
    /// the surface center and `(1, 0)` to the edge of the shorter span.
    /// Dimensions must be positive finite numbers; this layer does not
    /// guard against degenerate input.
    pub fn new(surface: S, width: f64, height: f64) -> Self {
        let size = width.min(height);
        let transform = Affine::scale_non_uniform(size / 2.0, -size / 2.0)
            * Affine::translate(Vec2::new(width / size, -height / size));

        Self {
            surface,
            state: GraphicsState {
                transform,
                source: DevicePaint::Solid(crate::Rgba::BLACK),
                line_width: 0.1,
                line_join: LineJoin::Round,
                line_cap: LineCap::Butt,
            },
            stack: Vec::new(),
            path: BezPath::new(),
            current: None,
            subpath_start: None,
            width: width / size,
            height: height / size,
            device_width: width,
            device_height: height,
        }
    }

    /// Logical half-extent of the surface along x (`>= 1`).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical half-extent of the surface along y (`>= 1`).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Give the surface back for finalization.
    pub fn finish(self) -> S {
        self.surface
    }

    // State

    /// Push the full graphics state (transform + paint state).
    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pop the most recently saved graphics state.
    ///
    /// An unbalanced restore is a programmer error in a drawable; it is
    /// logged and otherwise ignored rather than corrupting the base state.
    pub fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore without matching save"),
        }
    }

    /// Set the active paint source.
    ///
    /// Gradient geometry is resolved against the current transform at this
    /// point, not at fill time.
    pub fn set_source(&mut self, paint: impl Into<Paint>) {
        self.state.source = match paint.into() {
            Paint::Solid(color) => DevicePaint::Solid(color),
            Paint::Radial(gradient) => DevicePaint::Radial {
                center: self.state.transform * Point::ZERO,
                radius: transform_scale(self.state.transform),
                start: gradient.start,
                end: gradient.end,
            },
        };
    }

    /// The active source, as resolved device paint.
    pub fn source(&self) -> DevicePaint {
        self.state.source
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
    }

    pub fn line_join(&self) -> LineJoin {
        self.state.line_join
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    pub fn line_cap(&self) -> LineCap {
        self.state.line_cap
    }

    // Transform

    /// Append a scale to the current transform.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform * Affine::scale_non_uniform(sx, sy);
    }

    /// Append a uniform scale to the current transform.
    pub fn scale_uniform(&mut self, s: f64) {
        self.scale(s, s);
    }

    /// Append a translation to the current transform.
    pub fn translate(&mut self, x: f64, y: f64) {
        self.state.transform = self.state.transform * Affine::translate(Vec2::new(x, y));
    }

    // Path construction

    /// Start a new subpath at the given point.
    pub fn move_to(&mut self, point: impl Into<Point>) {
        let device = self.state.transform * point.into();
        self.path.move_to(device);
        self.current = Some(device);
        self.subpath_start = Some(device);
    }

    /// Append a straight segment to the given point.
    ///
    /// Without a current point this starts the subpath instead, matching
    /// the underlying surface semantics; a path may therefore open with a
    /// line node.
    pub fn line_to(&mut self, point: impl Into<Point>) {
        let point = point.into();
        if self.current.is_none() {
            self.move_to(point);
            return;
        }
        let device = self.state.transform * point;
        self.path.line_to(device);
        self.current = Some(device);
    }

    /// Append a closed rectangular subpath.
    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to((x, y));
        self.line_to((x + width, y));
        self.line_to((x + width, y + height));
        self.line_to((x, y + height));
        self.close_path();
    }

    /// Append a circular arc around `(x, y)`.
    ///
    /// Angles are in radians. Counterclockwise sweeps lift `end` by full
    /// turns until it is at or above `start`; `clockwise` selects the
    /// negative-direction sweep and lowers `end` symmetrically. A current
    /// point connects to the arc start with a line, otherwise the arc start
    /// opens the subpath.
    pub fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, clockwise: bool) {
        let mut sweep = end - start;
        if clockwise {
            while sweep > 0.0 {
                sweep -= TAU;
            }
        } else {
            while sweep < 0.0 {
                sweep += TAU;
            }
        }

        let center = Point::new(x, y);
        let first = center + radius * Vec2::new(start.cos(), start.sin());
        if self.current.is_some() {
            self.line_to(first);
        } else {
            self.move_to(first);
        }

        let arc = KurboArc::new(center, Vec2::new(radius, radius), start, sweep, 0.0);
        let transform = self.state.transform;
        let path = &mut self.path;
        let mut last = self.current;
        arc.to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p3| {
            let end = transform * p3;
            path.curve_to(transform * p1, transform * p2, end);
            last = Some(end);
        });
        self.current = last;
    }

    /// Close the current subpath back to its start point.
    pub fn close_path(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.path.close_path();
        self.current = self.subpath_start;
    }

    // Painting

    /// Fill the current path with the active source and clear the path.
    pub fn fill(&mut self) {
        let path = self.take_path();
        if !path.elements().is_empty() {
            self.surface.fill_path(&path, &self.state.source);
        }
    }

    /// Stroke the current path with the active source and clear the path.
    ///
    /// The stroke width is interpreted in the user space in effect now, at
    /// stroke time: a drawable that restored its local scale beforehand
    /// gets a visually constant thickness regardless of its geometry scale.
    pub fn stroke(&mut self) {
        let path = self.take_path();
        if path.elements().is_empty() {
            return;
        }
        let stroke = Stroke::new(self.state.line_width * transform_scale(self.state.transform))
            .with_join(join_to_kurbo(self.state.line_join))
            .with_caps(cap_to_kurbo(self.state.line_cap));
        self.surface.stroke_path(&path, &stroke, &self.state.source);
    }

    /// Fill the entire surface with the active source.
    ///
    /// Operates on the device viewport, so the overflow regions of a
    /// non-square surface are covered too. The current path is untouched.
    pub fn paint(&mut self) {
        let mut full = BezPath::new();
        full.move_to(Point::ZERO);
        full.line_to(Point::new(self.device_width, 0.0));
        full.line_to(Point::new(self.device_width, self.device_height));
        full.line_to(Point::new(0.0, self.device_height));
        full.close_path();
        self.surface.fill_path(&full, &self.state.source);
    }

    fn take_path(&mut self) -> BezPath {
        self.current = None;
        self.subpath_start = None;
        std::mem::take(&mut self.path)
    }
}

/// Uniform scale factor of an affine map.
///
/// Exact for the uniform scales the context composes; non-uniform transforms
/// resolve to the area-preserving equivalent.
fn transform_scale(transform: Affine) -> f64 {
    transform.determinant().abs().sqrt()
}

fn join_to_kurbo(join: LineJoin) -> kurbo::Join {
    match join {
        LineJoin::Miter => kurbo::Join::Miter,
        LineJoin::Round => kurbo::Join::Round,
        LineJoin::Bevel => kurbo::Join::Bevel,
    }
}

fn cap_to_kurbo(cap: LineCap) -> kurbo::Cap {
    match cap {
        LineCap::Butt => kurbo::Cap::Butt,
        LineCap::Round => kurbo::Cap::Round,
        LineCap::Square => kurbo::Cap::Square,
    }
}
