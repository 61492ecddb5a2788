//! CPU raster surface finalized to PNG.

use emblem_core::{DevicePaint, Rgba, Surface};
use kurbo::{BezPath, PathEl, Stroke};

use crate::error::{RenderError, RenderResult};

/// A pixel surface backed by the `vello_cpu` renderer.
///
/// Paths arrive in device space, so the render context transform stays at
/// identity; the surface only translates paints and stroke parameters.
pub struct RasterSurface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl RasterSurface {
    /// Allocate a surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(RenderError::InvalidDimensions { width, height });
        };
        if w == 0 || h == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            width: w,
            height: h,
        })
    }

    /// Rasterize and encode the accumulated drawing as PNG bytes.
    pub fn finish(mut self) -> RenderResult<Vec<u8>> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut rgba = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba);
        encode_png(&rgba, u32::from(self.width), u32::from(self.height))
    }

    fn apply_paint(&mut self, paint: &DevicePaint) {
        match paint {
            DevicePaint::Solid(color) => self.ctx.set_paint(color_to_cpu(*color)),
            DevicePaint::Radial {
                center,
                radius,
                start,
                end,
            } => self.ctx.set_paint(
                vello_cpu::peniko::Gradient::new_radial(
                    vello_cpu::kurbo::Point::new(center.x, center.y),
                    *radius as f32,
                )
                .with_stops([(0.0, color_to_cpu(*start)), (1.0, color_to_cpu(*end))]),
            ),
        }
    }
}

impl Surface for RasterSurface {
    fn fill_path(&mut self, path: &BezPath, paint: &DevicePaint) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.apply_paint(paint);
        self.ctx.fill_path(&path_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &DevicePaint) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.apply_paint(paint);
        self.ctx.set_stroke(stroke_to_cpu(stroke));
        self.ctx.stroke_path(&path_to_cpu(path));
    }
}

fn color_to_cpu(color: Rgba) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::new([
        color.r as f32,
        color.g as f32,
        color.b as f32,
        color.a as f32,
    ])
}

/// Rebuild a path against the renderer's own kurbo, element by element, to
/// stay robust against patch-version skew between the two crates.
fn path_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn stroke_to_cpu(stroke: &Stroke) -> vello_cpu::kurbo::Stroke {
    vello_cpu::kurbo::Stroke::new(stroke.width)
        .with_join(match stroke.join {
            kurbo::Join::Bevel => vello_cpu::kurbo::Join::Bevel,
            kurbo::Join::Miter => vello_cpu::kurbo::Join::Miter,
            kurbo::Join::Round => vello_cpu::kurbo::Join::Round,
        })
        .with_start_cap(match stroke.start_cap {
            kurbo::Cap::Butt => vello_cpu::kurbo::Cap::Butt,
            kurbo::Cap::Round => vello_cpu::kurbo::Cap::Round,
            kurbo::Cap::Square => vello_cpu::kurbo::Cap::Square,
        })
        .with_end_cap(match stroke.end_cap {
            kurbo::Cap::Butt => vello_cpu::kurbo::Cap::Butt,
            kurbo::Cap::Round => vello_cpu::kurbo::Cap::Round,
            kurbo::Cap::Square => vello_cpu::kurbo::Cap::Square,
        })
        .with_miter_limit(stroke.miter_limit)
}

/// Convert premultiplied RGBA8 to the straight alpha PNG expects.
fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

fn encode_png(rgba: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(out)
}
