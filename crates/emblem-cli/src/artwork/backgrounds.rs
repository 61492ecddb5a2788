//! Background gradient palette.

use emblem_core::{Background, Node, Rgba};

/// White fading to light grey, the classic neutral backdrop.
pub fn slate() -> Node {
    Background::default().into()
}

/// Warm cream fading to soft orange.
pub fn dawn() -> Node {
    Background::new(Rgba::rgb(1.0, 0.96, 0.9), Rgba::rgb(0.97, 0.7, 0.51)).into()
}

/// Pale sky fading to sea blue.
pub fn tide() -> Node {
    Background::new(Rgba::rgb(0.88, 0.95, 1.0), Rgba::rgb(0.45, 0.62, 0.82)).into()
}
