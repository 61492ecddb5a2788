//! Paint sources and validated line-style enums.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgba;
use crate::error::PaintError;

/// A radial gradient spanning the logical unit circle.
///
/// Stop 0 sits at the logical origin, stop 1 on the unit-circle edge. The
/// geometry is fixed; only the color pair varies. The context resolves it to
/// device coordinates when it becomes the active source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub start: Rgba,
    pub end: Rgba,
}

impl RadialGradient {
    pub const fn new(start: Rgba, end: Rgba) -> Self {
        Self { start, end }
    }
}

/// The active fill/stroke source: a solid color or a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialGradient),
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

impl From<RadialGradient> for Paint {
    fn from(gradient: RadialGradient) -> Self {
        Paint::Radial(gradient)
    }
}

impl From<(f64, f64, f64)> for Paint {
    fn from(rgb: (f64, f64, f64)) -> Self {
        Paint::Solid(rgb.into())
    }
}

impl From<(f64, f64, f64, f64)> for Paint {
    fn from(rgba: (f64, f64, f64, f64)) -> Self {
        Paint::Solid(rgba.into())
    }
}

/// How two stroked segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl LineJoin {
    /// The declared option set, in name order.
    pub const OPTIONS: [LineJoin; 3] = [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel];

    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineJoin {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| PaintError::UnknownLineJoin(s.to_owned()))
    }
}

/// How a stroked segment is terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    /// The declared option set, in name order.
    pub const OPTIONS: [LineCap; 3] = [LineCap::Butt, LineCap::Round, LineCap::Square];

    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineCap {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| PaintError::UnknownLineCap(s.to_owned()))
    }
}

/// Whether a shape outlines or fills its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Stroke,
    Fill,
}

impl Style {
    /// The declared option set, in name order.
    pub const OPTIONS: [Style; 2] = [Style::Stroke, Style::Fill];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Stroke => "stroke",
            Style::Fill => "fill",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| PaintError::UnknownStyle(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_join_round_trip() {
        for join in LineJoin::OPTIONS {
            assert_eq!(join.as_str().parse::<LineJoin>().unwrap(), join);
        }
    }

    #[test]
    fn test_line_cap_round_trip() {
        for cap in LineCap::OPTIONS {
            assert_eq!(cap.as_str().parse::<LineCap>().unwrap(), cap);
        }
    }

    #[test]
    fn test_style_round_trip() {
        for style in Style::OPTIONS {
            assert_eq!(style.as_str().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_unknown_line_join_lists_options() {
        let err = "mitre".parse::<LineJoin>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("mitre"));
        assert!(message.contains("miter, round, bevel"));
    }

    #[test]
    fn test_unknown_line_cap_is_rejected() {
        assert_eq!(
            "none".parse::<LineCap>(),
            Err(PaintError::UnknownLineCap("none".to_owned()))
        );
    }

    #[test]
    fn test_paint_from_tuples() {
        assert_eq!(
            Paint::from((1.0, 0.0, 0.0)),
            Paint::Solid(Rgba::rgb(1.0, 0.0, 0.0))
        );
        assert_eq!(
            Paint::from((1.0, 0.0, 0.0, 0.5)),
            Paint::Solid(Rgba::rgba(1.0, 0.0, 0.0, 0.5))
        );
    }
}
