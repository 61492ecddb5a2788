//! Path node built from line, arc and close segments.

use kurbo::Point;

use super::{Drawable, Shape};
use crate::context::Context;
use crate::error::DrawError;
use crate::surface::Surface;

/// One segment of a [`Path`], appended to the open path in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PathNode {
    /// Straight segment to a point; as the first node it establishes the
    /// start point instead (context path-start semantics).
    Line { to: Point },
    /// Circular arc segment; as the first node the arc start opens the
    /// subpath, otherwise a connecting line is emitted first.
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        clockwise: bool,
    },
    /// Close the current subpath back to its start; a no-op while no
    /// subpath is open.
    Close,
}

impl PathNode {
    fn connect<S: Surface>(&self, ctx: &mut Context<S>) {
        match self {
            PathNode::Line { to } => ctx.line_to(*to),
            PathNode::Arc {
                center,
                radius,
                start,
                end,
                clockwise,
            } => ctx.arc(center.x, center.y, *radius, *start, *end, *clockwise),
            PathNode::Close => ctx.close_path(),
        }
    }
}

/// A leaf drawable holding an ordered sequence of path segments.
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub shape: Shape,
    nodes: Vec<PathNode>,
}

impl Path {
    /// Create an empty path; at least one segment must be appended before
    /// drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line segment.
    pub fn line(mut self, x: f64, y: f64) -> Self {
        self.nodes.push(PathNode::Line {
            to: Point::new(x, y),
        });
        self
    }

    /// Append an arc segment.
    pub fn arc(mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, clockwise: bool) -> Self {
        self.nodes.push(PathNode::Arc {
            center: Point::new(x, y),
            radius,
            start,
            end,
            clockwise,
        });
        self
    }

    /// Close the current subpath.
    pub fn close(mut self) -> Self {
        self.nodes.push(PathNode::Close);
        self
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn with_style(mut self, style: crate::paint::Style) -> Self {
        self.shape = self.shape.with_style(style);
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.shape = self.shape.with_line_width(width);
        self
    }

    pub fn with_line_join(mut self, join: crate::paint::LineJoin) -> Self {
        self.shape = self.shape.with_line_join(join);
        self
    }

    pub fn with_color(mut self, color: crate::color::Rgba) -> Self {
        self.shape = self.shape.with_color(color);
        self
    }
}

impl Drawable for Path {
    fn draw<S: Surface>(&self, ctx: &mut Context<S>) -> Result<(), DrawError> {
        // Checked before any scope opens, so a failed draw leaves the
        // context untouched.
        if self.nodes.is_empty() {
            return Err(DrawError::EmptyPath);
        }
        self.shape.begin(ctx);
        for node in &self.nodes {
            node.connect(ctx);
        }
        self.shape.finish(ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{RecordedOp, RecordingSurface};
    use std::f64::consts::PI;

    #[test]
    fn test_empty_path_fails_fast() {
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 64.0, 64.0);
        assert_eq!(Path::new().draw(&mut ctx), Err(DrawError::EmptyPath));
        drop(ctx);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_builder_keeps_segment_order() {
        let path = Path::new()
            .line(0.0, 1.0)
            .arc(0.0, 0.0, 1.0, 0.0, PI, false)
            .close();

        assert_eq!(path.nodes().len(), 3);
        assert!(matches!(path.nodes()[0], PathNode::Line { .. }));
        assert!(matches!(path.nodes()[1], PathNode::Arc { .. }));
        assert!(matches!(path.nodes()[2], PathNode::Close));
    }

    #[test]
    fn test_first_line_establishes_start_point() {
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 256.0, 256.0);
        Path::new()
            .line(-1.0, 0.0)
            .line(1.0, 0.0)
            .draw(&mut ctx)
            .unwrap();
        drop(ctx);

        assert_eq!(
            surface.last_path_start().unwrap(),
            kurbo::Point::new(0.0, 128.0)
        );
    }

    #[test]
    fn test_first_arc_establishes_start_point() {
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 256.0, 256.0);
        Path::new()
            .arc(0.0, 0.0, 1.0, 0.0, PI / 2.0, false)
            .draw(&mut ctx)
            .unwrap();
        drop(ctx);

        assert_eq!(
            surface.last_path_start().unwrap(),
            kurbo::Point::new(256.0, 128.0)
        );
    }

    #[test]
    fn test_close_emits_close_element() {
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 64.0, 64.0);
        Path::new()
            .line(0.0, 0.0)
            .line(0.5, 0.0)
            .line(0.5, 0.5)
            .close()
            .draw(&mut ctx)
            .unwrap();
        drop(ctx);

        let path = match &surface.ops[0] {
            RecordedOp::Stroke { path, .. } => path,
            _ => panic!("expected a stroke"),
        };
        assert!(matches!(
            path.elements().last().unwrap(),
            kurbo::PathEl::ClosePath
        ));
    }

    #[test]
    fn test_leading_close_is_a_no_op() {
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 64.0, 64.0);
        Path::new()
            .close()
            .line(0.0, 0.0)
            .line(0.5, 0.5)
            .draw(&mut ctx)
            .unwrap();
        drop(ctx);

        let path = match &surface.ops[0] {
            RecordedOp::Stroke { path, .. } => path,
            _ => panic!("expected a stroke"),
        };
        assert!(matches!(path.elements()[0], kurbo::PathEl::MoveTo(_)));
        assert_eq!(path.elements().len(), 2);
    }
}
