//! Three-fold knot: three arcs on a ring, linked by chords.

use emblem_core::{Arc, Group, Node, Path, Rgba};

/// Ring radius the arc centers sit on.
const RING: f64 = 0.8;
/// Radius of each arc lobe.
const LOBE: f64 = 0.25;

pub fn build() -> Node {
    let mut group = Group::new().with_color(Rgba::rgb(0.0, 0.0, 1.0));
    for angle in [90.0, 210.0, 330.0] {
        group.push(chord(angle));
        group.push(lobe(angle));
    }
    group.into()
}

/// Straight link from this lobe's mouth to the next one's.
fn chord(angle: f64) -> Path {
    Path::new()
        .line(
            RING * angle.to_radians().cos() - LOBE * (angle - 30.0).to_radians().cos(),
            RING * angle.to_radians().sin() - LOBE * (angle - 30.0).to_radians().sin(),
        )
        .line(
            RING * (angle + 120.0).to_radians().cos()
                - LOBE * (angle + 150.0).to_radians().cos(),
            RING * (angle + 120.0).to_radians().sin()
                - LOBE * (angle + 150.0).to_radians().sin(),
        )
}

/// Open arc facing the ring center.
fn lobe(angle: f64) -> Arc {
    Arc::new(
        RING * angle.to_radians().cos(),
        RING * angle.to_radians().sin(),
        LOBE,
        (angle - 230.0).to_radians(),
        (angle - 130.0).to_radians(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_chords_and_three_lobes() {
        match build() {
            Node::Group(group) => {
                assert_eq!(group.children().len(), 6);
                assert_eq!(group.color, Some(Rgba::rgb(0.0, 0.0, 1.0)));
            }
            other => panic!("expected a group, got {other:?}"),
        }
    }

    #[test]
    fn test_lobe_spans_a_hundred_degrees() {
        let lobe = lobe(90.0);
        assert!((lobe.end - lobe.start - 100f64.to_radians()).abs() < 1e-12);
    }
}
