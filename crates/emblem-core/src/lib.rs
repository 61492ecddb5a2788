//! Emblem Core Library
//!
//! Backend-agnostic rendering context and drawable composition model for the
//! Emblem logo renderer. A caller builds a tree of [`shapes::Node`] values,
//! obtains a [`Context`] over any [`Surface`] implementation, and asks the
//! root node to draw itself; the context normalizes the surface into a fixed
//! logical coordinate space so the same tree produces identical geometry on
//! every output target.

pub mod color;
pub mod context;
pub mod error;
pub mod paint;
pub mod shapes;
pub mod surface;

pub use color::Rgba;
pub use context::Context;
pub use error::{DrawError, PaintError};
pub use paint::{LineCap, LineJoin, Paint, RadialGradient, Style};
pub use shapes::{Arc, Background, Drawable, Group, Node, Oval, Path, PathNode, Shape};
pub use surface::{DevicePaint, Surface};

/// Render a drawable tree into a borrowed surface.
///
/// Convenience for callers that keep ownership of their surface: a fresh
/// context is created for this single pass and dropped afterwards, leaving
/// finalization to the caller.
pub fn render_into<S: Surface>(
    root: &Node,
    surface: &mut S,
    width: f64,
    height: f64,
) -> Result<(), DrawError> {
    let mut ctx = Context::new(surface, width, height);
    root.draw(&mut ctx)
}
