//! Concentric arc segments with alternating spans.

use emblem_core::{Arc, Group, Node, Rgba};

const INNER_RADIUS: f64 = 0.3;
const OUTER_RADIUS: f64 = 0.6;
const THIN: f64 = 0.05;

pub fn build() -> Node {
    let mut group = Group::new().with_color(Rgba::rgb(0.0, 1.0, 0.0));

    for i in 0..4 {
        let angle = f64::from(i) * 90.0 + 22.5;
        group.push(inner_arc(angle));
    }
    for i in 0..2 {
        let angle = f64::from(i) * 180.0 - 22.5;
        group.push(small_outer_arc(angle));
    }
    for i in 0..2 {
        let angle = f64::from(i) * 180.0 + 45.0;
        group.push(big_outer_arc(angle));
    }

    group.into()
}

fn inner_arc(angle: f64) -> Arc {
    Arc::new(
        0.0,
        0.0,
        INNER_RADIUS,
        angle.to_radians(),
        (angle + 45.0).to_radians(),
    )
    .with_line_width(THIN)
}

fn small_outer_arc(angle: f64) -> Arc {
    Arc::new(
        0.0,
        0.0,
        OUTER_RADIUS,
        angle.to_radians(),
        (angle + 45.0).to_radians(),
    )
    .with_line_width(THIN)
}

fn big_outer_arc(angle: f64) -> Arc {
    Arc::new(
        0.0,
        0.0,
        OUTER_RADIUS,
        angle.to_radians(),
        (angle + 90.0).to_radians(),
    )
}
