//! Elliptic arc node.

use std::f64::consts::TAU;

use super::{Drawable, Shape};
use crate::context::Context;
use crate::error::DrawError;
use crate::surface::Surface;

/// An [`super::Arc`] with independent x/y radii, producing an ellipse.
#[derive(Debug, Clone)]
pub struct Oval {
    pub shape: Shape,
    pub start: f64,
    pub end: f64,
}

impl Oval {
    /// Create an elliptic arc with radii `(rx, ry)` around `(x, y)`.
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, start: f64, end: f64) -> Self {
        Self {
            shape: Shape::default().with_position(x, y).with_scale(rx, ry),
            start,
            end,
        }
    }

    /// Create a full ellipse.
    pub fn full(x: f64, y: f64, rx: f64, ry: f64) -> Self {
        Self::new(x, y, rx, ry, 0.0, TAU)
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

impl Drawable for Oval {
    fn draw<S: Surface>(&self, ctx: &mut Context<S>) -> Result<(), DrawError> {
        self.shape.begin(ctx);
        ctx.arc(0.0, 0.0, 1.0, self.start, self.end, false);
        self.shape.finish(ctx);
        Ok(())
    }
}
