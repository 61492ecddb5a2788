//! Two mirrored posts, each a hooked curve and a straight bar.

use std::f64::consts::PI;

use emblem_core::{Group, Node, Path, Rgba};

pub fn build() -> Node {
    Group::new()
        .with_color(Rgba::rgb(1.0, 0.0, 0.0))
        .with(side(-1.0))
        .with(side(1.0))
        .into()
}

fn side(direction: f64) -> Group {
    Group::new().with(curve(direction)).with(bar(direction))
}

/// Hook over the top of the post, mirrored by sweeping the opposite way.
fn curve(direction: f64) -> Path {
    let (end, clockwise) = if direction < 0.0 { (0.0, true) } else { (PI, false) };
    Path::new()
        .arc(direction * 0.4, 0.4, 0.2, PI / 2.0, end, clockwise)
        .line(direction * 0.2, -0.5)
}

fn bar(direction: f64) -> Path {
    Path::new()
        .line(direction * 0.4, 0.3)
        .line(direction * 0.4, -0.4)
}
