//! Lantern figure: an oval body, a dot core, a caret above and a base line.

use emblem_core::{Arc, Group, Node, Oval, Path, Rgba};

const THIN: f64 = 0.05;

pub fn build() -> Node {
    Group::new()
        .with_color(Rgba::rgb(1.0, 1.0, 0.0))
        .with(caret())
        .with(body())
        .with(core())
        .with(base())
        .into()
}

fn caret() -> Path {
    Path::new()
        .line(-0.1, 0.55)
        .line(0.0, 0.6)
        .line(0.1, 0.55)
        .with_line_width(THIN)
}

fn body() -> Oval {
    Oval::full(0.0, 0.0, 0.6, 0.4)
}

fn core() -> Arc {
    Arc::circle(0.0, 0.0, 0.05)
}

fn base() -> Path {
    Path::new()
        .line(-0.1, -0.55)
        .line(0.1, -0.55)
        .with_line_width(THIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_parts() {
        match build() {
            Node::Group(group) => assert_eq!(group.children().len(), 4),
            other => panic!("expected a group, got {other:?}"),
        }
    }

    #[test]
    fn test_body_radii() {
        let body = body();
        assert!((body.shape.scale.x - 0.6).abs() < f64::EPSILON);
        assert!((body.shape.scale.y - 0.4).abs() < f64::EPSILON);
    }
}
