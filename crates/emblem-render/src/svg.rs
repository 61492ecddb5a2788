//! Streaming SVG surface.
//!
//! Drawing commands append `<path>` elements as they arrive; gradients go
//! into a `<defs>` table and the document is assembled at finalization. The
//! path data is serialized from the same device-space geometry the raster
//! backend fills, which keeps the two formats geometrically identical.

use std::fmt::Write as _;

use emblem_core::{DevicePaint, Rgba, Surface};
use kurbo::{BezPath, Cap, Join, Stroke};

use crate::error::{RenderError, RenderResult};

/// A vector surface that streams drawing commands into SVG markup.
pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
    defs: String,
    gradients: usize,
}

impl SvgSurface {
    /// Open a surface of the given document dimensions (user units).
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            body: String::new(),
            defs: String::new(),
            gradients: 0,
        })
    }

    /// Close the document and return the markup bytes.
    pub fn finish(self) -> Vec<u8> {
        let mut doc = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                "\n"
            ),
            w = self.width,
            h = self.height,
        );
        if !self.defs.is_empty() {
            doc.push_str("<defs>\n");
            doc.push_str(&self.defs);
            doc.push_str("</defs>\n");
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc.into_bytes()
    }

    /// Attribute value for a paint; radial paints register a gradient def.
    fn paint_value(&mut self, paint: &DevicePaint) -> String {
        match paint {
            DevicePaint::Solid(color) => hex_color(*color),
            DevicePaint::Radial {
                center,
                radius,
                start,
                end,
            } => {
                let id = format!("rg{}", self.gradients);
                self.gradients += 1;
                write!(
                    self.defs,
                    concat!(
                        r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" "#,
                        r#"cx="{cx}" cy="{cy}" r="{r}">"#,
                    ),
                    id = id,
                    cx = center.x,
                    cy = center.y,
                    r = radius,
                )
                .unwrap();
                write_stop(&mut self.defs, 0, *start);
                write_stop(&mut self.defs, 1, *end);
                self.defs.push_str("</radialGradient>\n");
                format!("url(#{id})")
            }
        }
    }

    fn paint_opacity(paint: &DevicePaint) -> Option<f64> {
        match paint {
            DevicePaint::Solid(color) if color.a < 1.0 => Some(color.a),
            _ => None,
        }
    }
}

impl Surface for SvgSurface {
    fn fill_path(&mut self, path: &BezPath, paint: &DevicePaint) {
        let fill = self.paint_value(paint);
        write!(self.body, r#"<path d="{}" fill="{fill}""#, path.to_svg()).unwrap();
        if let Some(opacity) = Self::paint_opacity(paint) {
            write!(self.body, r#" fill-opacity="{opacity}""#).unwrap();
        }
        self.body.push_str("/>\n");
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, paint: &DevicePaint) {
        let color = self.paint_value(paint);
        write!(
            self.body,
            concat!(
                r#"<path d="{d}" fill="none" stroke="{color}" stroke-width="{width}" "#,
                r#"stroke-linejoin="{join}" stroke-linecap="{cap}""#,
            ),
            d = path.to_svg(),
            color = color,
            width = stroke.width,
            join = join_name(stroke.join),
            cap = cap_name(stroke.start_cap),
        )
        .unwrap();
        if let Some(opacity) = Self::paint_opacity(paint) {
            write!(self.body, r#" stroke-opacity="{opacity}""#).unwrap();
        }
        self.body.push_str("/>\n");
    }
}

fn write_stop(defs: &mut String, offset: u8, color: Rgba) {
    write!(
        defs,
        r#"<stop offset="{offset}" stop-color="{}""#,
        hex_color(color)
    )
    .unwrap();
    if color.a < 1.0 {
        write!(defs, r#" stop-opacity="{}""#, color.a).unwrap();
    }
    defs.push_str("/>");
}

fn hex_color(color: Rgba) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_u8(color.r),
        channel_u8(color.g),
        channel_u8(color.b)
    )
}

fn channel_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn join_name(join: Join) -> &'static str {
    match join {
        Join::Miter => "miter",
        Join::Round => "round",
        Join::Bevel => "bevel",
    }
}

fn cap_name(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}
