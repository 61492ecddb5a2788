//! Error types for paint validation and drawing.

use thiserror::Error;

/// Rejected paint state input.
///
/// Raised at the property boundary, before any surface state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    /// A color was built from a component slice that is neither rgb nor rgba.
    #[error("source needs three components (rgb) or four (rgba), got {0}")]
    InvalidComponentCount(usize),
    /// A line join name outside the declared option set.
    #[error("unknown line join '{0}', choose from miter, round, bevel")]
    UnknownLineJoin(String),
    /// A line cap name outside the declared option set.
    #[error("unknown line cap '{0}', choose from butt, round, square")]
    UnknownLineCap(String),
    /// A draw style name outside the declared option set.
    #[error("unknown style '{0}', choose from stroke, fill")]
    UnknownStyle(String),
}

/// A drawable that cannot be rendered as constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A path with no nodes has no start point and nothing to emit.
    #[error("path has no nodes, nothing establishes a start point")]
    EmptyPath,
}
