//! Radial gradient background.

use super::Drawable;
use crate::color::Rgba;
use crate::context::Context;
use crate::error::DrawError;
use crate::paint::RadialGradient;
use crate::surface::Surface;

/// A paint-only leaf that floods the surface with a radial gradient.
///
/// The gradient runs from the logical center (`start`) to the unit-circle
/// edge (`end`); the flood covers the device viewport, so the overflow of a
/// non-square surface is painted too.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub start: Rgba,
    pub end: Rgba,
}

impl Background {
    pub const fn new(start: Rgba, end: Rgba) -> Self {
        Self { start, end }
    }
}

impl Default for Background {
    /// White fading to light grey.
    fn default() -> Self {
        Self::new(Rgba::WHITE, Rgba::rgb(0.78, 0.78, 0.78))
    }
}

impl Drawable for Background {
    fn draw<S: Surface>(&self, ctx: &mut Context<S>) -> Result<(), DrawError> {
        ctx.set_source(RadialGradient::new(self.start, self.end));
        ctx.paint();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{RecordedOp, RecordingSurface};
    use crate::surface::DevicePaint;

    #[test]
    fn test_flood_covers_non_square_corners() {
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 512.0, 256.0);
        Background::default().draw(&mut ctx).unwrap();
        drop(ctx);

        let path = match &surface.ops[0] {
            RecordedOp::Fill { path, .. } => path,
            _ => panic!("expected a fill"),
        };
        let bbox = kurbo::Shape::bounding_box(path);
        assert!((bbox.x0 - 0.0).abs() < 1e-9 && (bbox.y0 - 0.0).abs() < 1e-9);
        assert!((bbox.x1 - 512.0).abs() < 1e-9 && (bbox.y1 - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_gradient_is_centered() {
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 512.0, 256.0);
        Background::default().draw(&mut ctx).unwrap();
        drop(ctx);

        match &surface.ops[0] {
            RecordedOp::Fill {
                paint: DevicePaint::Radial { center, radius, .. },
                ..
            } => {
                assert!((*center - kurbo::Point::new(256.0, 128.0)).hypot() < 1e-9);
                // One logical unit: half the shorter dimension.
                assert!((radius - 128.0).abs() < 1e-9);
            }
            other => panic!("expected a radial fill, got {other:?}"),
        }
    }
}
