//! Export driver: one render pass from a drawable tree to encoded bytes.

use std::path::Path;
use std::str::FromStr;

use emblem_core::{Context, Drawable, Node};

use crate::error::{RenderError, RenderResult};
use crate::raster::RasterSurface;
use crate::svg::SvgSurface;

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    /// The declared option set, in name order.
    pub const OPTIONS: [ExportFormat; 2] = [ExportFormat::Png, ExportFormat::Svg];

    /// File extension (and option name) for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    /// Infer a format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::OPTIONS
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }
}

impl FromStr for ExportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|format| format.extension() == s)
            .ok_or_else(|| RenderError::UnknownFormat(s.to_owned()))
    }
}

/// Render a drawable tree and encode it for the given target.
///
/// A fresh context is created for the pass; `width` and `height` feed both
/// the surface allocation and the coordinate normalization, so raster and
/// vector exports of the same tree and dimensions carry identical geometry.
pub fn export(
    root: &Node,
    format: ExportFormat,
    width: u32,
    height: u32,
) -> RenderResult<Vec<u8>> {
    log::debug!(
        "exporting {}x{} {}",
        width,
        height,
        format.extension()
    );
    match format {
        ExportFormat::Png => {
            let surface = RasterSurface::new(width, height)?;
            let mut ctx = Context::new(surface, f64::from(width), f64::from(height));
            root.draw(&mut ctx)?;
            ctx.finish().finish()
        }
        ExportFormat::Svg => {
            let surface = SvgSurface::new(width, height)?;
            let mut ctx = Context::new(surface, f64::from(width), f64::from(height));
            root.draw(&mut ctx)?;
            Ok(ctx.finish().finish())
        }
    }
}

/// Export straight to a file.
///
/// The tree renders into memory first; a draw failure aborts before the
/// path is touched, so no partial file is left behind.
pub fn export_to_file(
    root: &Node,
    path: impl AsRef<Path>,
    format: ExportFormat,
    width: u32,
    height: u32,
) -> RenderResult<()> {
    let path = path.as_ref();
    let bytes = export(root, format, width, height)?;
    std::fs::write(path, &bytes).map_err(|source| RenderError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use emblem_core::{Arc, Background, Group, Path as PathNode, Rgba};
    use std::f64::consts::PI;

    fn sample_tree() -> Node {
        Group::new()
            .with(Background::default())
            .with(
                Arc::new(0.0, 0.0, 0.5, 0.0, PI).with_color(Rgba::rgb(1.0, 0.0, 0.0)),
            )
            .into()
    }

    #[test]
    fn test_format_from_str_round_trip() {
        for format in ExportFormat::OPTIONS {
            assert_eq!(
                format.extension().parse::<ExportFormat>().unwrap(),
                format
            );
        }
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(matches!(
            "gif".parse::<ExportFormat>(),
            Err(RenderError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/logo.PNG")),
            Some(ExportFormat::Png)
        );
        assert_eq!(ExportFormat::from_path(Path::new("logo.webp")), None);
        assert_eq!(ExportFormat::from_path(Path::new("logo")), None);
    }

    #[test]
    fn test_png_export_produces_png_bytes() {
        let bytes = export(&sample_tree(), ExportFormat::Png, 256, 256).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_svg_export_contains_gradient_and_stroke() {
        let bytes = export(&sample_tree(), ExportFormat::Svg, 256, 256).unwrap();
        let doc = String::from_utf8(bytes).unwrap();
        assert!(doc.contains("radialGradient"));
        assert!(doc.contains(r##"stroke="#ff0000""##));
    }

    #[test]
    fn test_non_square_exports_still_render() {
        assert!(export(&sample_tree(), ExportFormat::Png, 512, 256).is_ok());
        assert!(export(&sample_tree(), ExportFormat::Svg, 512, 256).is_ok());
    }

    /// Captures the device-space paths a render pass emits.
    #[derive(Default)]
    struct CapturePaths {
        paths: Vec<kurbo::BezPath>,
    }

    impl emblem_core::Surface for CapturePaths {
        fn fill_path(&mut self, path: &kurbo::BezPath, _paint: &emblem_core::DevicePaint) {
            self.paths.push(path.clone());
        }

        fn stroke_path(
            &mut self,
            path: &kurbo::BezPath,
            _stroke: &kurbo::Stroke,
            _paint: &emblem_core::DevicePaint,
        ) {
            self.paths.push(path.clone());
        }
    }

    #[test]
    fn test_svg_geometry_matches_device_paths() {
        let tree = sample_tree();

        let mut capture = CapturePaths::default();
        emblem_core::render_into(&tree, &mut capture, 256.0, 256.0).unwrap();
        assert!(!capture.paths.is_empty());

        let doc =
            String::from_utf8(export(&tree, ExportFormat::Svg, 256, 256).unwrap()).unwrap();
        for path in &capture.paths {
            assert!(doc.contains(&path.to_svg()));
        }
    }

    #[test]
    fn test_failed_draw_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("broken.svg");
        let tree: Node = PathNode::new().into();

        let result = export_to_file(&tree, &out, ExportFormat::Svg, 64, 64);
        assert!(matches!(result, Err(RenderError::Draw(_))));
        assert!(!out.exists());
    }

    #[test]
    fn test_export_to_file_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("logo.svg");
        export_to_file(&sample_tree(), &out, ExportFormat::Svg, 128, 128).unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }
}
