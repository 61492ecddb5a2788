//! Drawable node hierarchy.
//!
//! Artwork is a tree of declarative nodes, pure data until a context is
//! supplied. Rendering recursively establishes and unwinds transform and
//! paint scopes, so a drawable always leaves the context exactly as it
//! found it.

mod arc;
mod background;
mod group;
mod oval;
mod path;

pub use arc::Arc;
pub use background::Background;
pub use group::Group;
pub use oval::Oval;
pub use path::{Path, PathNode};

use kurbo::{Point, Vec2};

use crate::color::Rgba;
use crate::context::Context;
use crate::error::DrawError;
use crate::paint::{LineJoin, Style};
use crate::surface::Surface;

/// Anything that can render itself into a context.
pub trait Drawable {
    fn draw<S: Surface>(&self, ctx: &mut Context<S>) -> Result<(), DrawError>;
}

/// Closed set of drawable node kinds.
#[derive(Debug, Clone)]
pub enum Node {
    Group(Group),
    Path(Path),
    Arc(Arc),
    Oval(Oval),
    Background(Background),
}

impl Drawable for Node {
    fn draw<S: Surface>(&self, ctx: &mut Context<S>) -> Result<(), DrawError> {
        match self {
            Node::Group(n) => n.draw(ctx),
            Node::Path(n) => n.draw(ctx),
            Node::Arc(n) => n.draw(ctx),
            Node::Oval(n) => n.draw(ctx),
            Node::Background(n) => n.draw(ctx),
        }
    }
}

impl From<Group> for Node {
    fn from(value: Group) -> Node {
        Node::Group(value)
    }
}

impl From<Path> for Node {
    fn from(value: Path) -> Node {
        Node::Path(value)
    }
}

impl From<Arc> for Node {
    fn from(value: Arc) -> Node {
        Node::Arc(value)
    }
}

impl From<Oval> for Node {
    fn from(value: Oval) -> Node {
        Node::Oval(value)
    }
}

impl From<Background> for Node {
    fn from(value: Background) -> Node {
        Node::Background(value)
    }
}

/// Common fields of a geometric leaf: local placement plus paint style.
///
/// Embedded by value in [`Path`], [`Arc`] and [`Oval`]. The builder methods
/// stand in for per-instance overrides of the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Local translation applied before the geometry is emitted.
    pub position: Point,
    /// Local scale; an arc's radius lives here.
    pub scale: Vec2,
    /// Outline or fill.
    pub style: Style,
    /// Stroke thickness in logical surface units, independent of `scale`.
    pub line_width: f64,
    pub line_join: LineJoin,
    /// Paint override for this leaf only; `None` inherits the active source.
    pub color: Option<Rgba>,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            scale: Vec2::new(1.0, 1.0),
            style: Style::Stroke,
            line_width: 0.1,
            line_join: LineJoin::Round,
            color: None,
        }
    }
}

impl Shape {
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale = Vec2::new(sx, sy);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Open the drawing scopes for this leaf.
    ///
    /// The outer save bounds the paint state (color override, line style);
    /// the inner save bounds the local transform. `finish` unwinds the
    /// inner scope before stroking so that line width is expressed in
    /// surface units rather than scaled by the local geometry, and unwinds
    /// the outer scope afterwards so nothing leaks to siblings.
    pub fn begin<S: Surface>(&self, ctx: &mut Context<S>) {
        ctx.save();
        if let Some(color) = self.color {
            ctx.set_source(color);
        }
        ctx.save();
        ctx.translate(self.position.x, self.position.y);
        ctx.scale(self.scale.x, self.scale.y);
    }

    /// Apply the style to the accumulated geometry and unwind the scopes.
    pub fn finish<S: Surface>(&self, ctx: &mut Context<S>) {
        ctx.restore();
        match self.style {
            Style::Stroke => {
                ctx.set_line_width(self.line_width);
                ctx.set_line_join(self.line_join);
                ctx.stroke();
            }
            Style::Fill => ctx.fill(),
        }
        ctx.restore();
    }
}
