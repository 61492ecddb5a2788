//! Output surface abstraction.
//!
//! A surface is a device-space sink for finished geometry. The context does
//! all coordinate and paint resolution before calling into it, so a raster
//! and a vector backend receive bit-identical paths for the same drawable
//! tree, which is what makes cross-format geometry identity structural.

use kurbo::{BezPath, Point, Stroke};

use crate::color::Rgba;

/// A paint source resolved into device coordinates.
///
/// Gradients are resolved against the transform in effect when the source
/// was set, mirroring the pattern-locking behavior of stateful 2D surface
/// APIs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DevicePaint {
    Solid(Rgba),
    Radial {
        center: Point,
        radius: f64,
        start: Rgba,
        end: Rgba,
    },
}

/// A target accepting primitive drawing operations in device space.
///
/// Paths are fully transformed and arcs already flattened to cubic Béziers;
/// stroke parameters are in device units. Draw calls are infallible;
/// encoding and I/O failures belong to the concrete backend's finalization
/// step.
pub trait Surface {
    /// Fill a device-space path with the given paint (nonzero winding).
    fn fill_path(&mut self, path: &BezPath, paint: &DevicePaint);

    /// Stroke a device-space path.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &DevicePaint);
}

/// A context can borrow an externally owned surface; the borrower never
/// finalizes it.
impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_path(&mut self, path: &BezPath, paint: &DevicePaint) {
        (**self).fill_path(path, paint);
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &DevicePaint) {
        (**self).stroke_path(path, stroke, paint);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use kurbo::{Cap, Join};

    /// A primitive call captured by [`RecordingSurface`].
    #[derive(Debug, Clone)]
    pub(crate) enum RecordedOp {
        Fill {
            path: BezPath,
            paint: DevicePaint,
        },
        Stroke {
            path: BezPath,
            width: f64,
            join: Join,
            cap: Cap,
            paint: DevicePaint,
        },
    }

    /// Surface double that records device-space emissions for assertions.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub ops: Vec<RecordedOp>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        /// First point of the most recently recorded path.
        pub fn last_path_start(&self) -> Option<Point> {
            let path = match self.ops.last()? {
                RecordedOp::Fill { path, .. } => path,
                RecordedOp::Stroke { path, .. } => path,
            };
            match path.elements().first()? {
                kurbo::PathEl::MoveTo(p) => Some(*p),
                _ => None,
            }
        }
    }

    impl Surface for RecordingSurface {
        fn fill_path(&mut self, path: &BezPath, paint: &DevicePaint) {
            self.ops.push(RecordedOp::Fill {
                path: path.clone(),
                paint: *paint,
            });
        }

        fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &DevicePaint) {
            self.ops.push(RecordedOp::Stroke {
                path: path.clone(),
                width: stroke.width,
                join: stroke.join,
                cap: stroke.start_cap,
                paint: *paint,
            });
        }
    }
}
