//! Circular arc node.

use std::f64::consts::TAU;

use super::{Drawable, Shape};
use crate::context::Context;
use crate::error::DrawError;
use crate::surface::Surface;

/// A circular arc with implicit unit-circle geometry.
///
/// The radius lives in the local scale, so the emitted geometry is always
/// the unit circle from `start` to `end`; stroke thickness stays in surface
/// units because the local scale is unwound before stroking.
#[derive(Debug, Clone)]
pub struct Arc {
    pub shape: Shape,
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians; swept counterclockwise from `start`.
    pub end: f64,
}

impl Arc {
    /// Create an arc of `radius` around `(x, y)`.
    pub fn new(x: f64, y: f64, radius: f64, start: f64, end: f64) -> Self {
        Self {
            shape: Shape::default()
                .with_position(x, y)
                .with_scale(radius, radius),
            start,
            end,
        }
    }

    /// Create a full circle.
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::new(x, y, radius, 0.0, TAU)
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

impl Drawable for Arc {
    fn draw<S: Surface>(&self, ctx: &mut Context<S>) -> Result<(), DrawError> {
        self.shape.begin(ctx);
        ctx.arc(0.0, 0.0, 1.0, self.start, self.end, false);
        self.shape.finish(ctx);
        Ok(())
    }
}
