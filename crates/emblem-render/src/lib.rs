//! Emblem Render Library
//!
//! Concrete output surfaces for the Emblem core: a CPU raster backend that
//! finalizes to PNG and a streaming SVG backend. Both consume the identical
//! device-space geometry the core context emits, so the two formats stay
//! geometrically interchangeable.

mod error;
mod export;
mod raster;
mod svg;

pub use error::{RenderError, RenderResult};
pub use export::{export, export_to_file, ExportFormat};
pub use raster::RasterSurface;
pub use svg::SvgSurface;
