//! Group node for composing drawables.

use super::{Drawable, Node};
use crate::color::Rgba;
use crate::context::Context;
use crate::error::DrawError;
use crate::surface::Surface;

/// An ordered collection of child nodes, painted in insertion order.
///
/// Later children fully occlude earlier ones where geometry overlaps. An
/// optional color becomes the active source before the children render;
/// children that set their own color override it for their draw call only.
/// A group establishes no transform scope of its own.
#[derive(Debug, Clone, Default)]
pub struct Group {
    /// Source applied before the children draw, if set.
    pub color: Option<Rgba>,
    children: Vec<Node>,
}

impl Group {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Append a child, chaining.
    pub fn with(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drawable for Group {
    fn draw<S: Surface>(&self, ctx: &mut Context<S>) -> Result<(), DrawError> {
        if let Some(color) = self.color {
            ctx.set_source(color);
        }
        for child in &self.children {
            child.draw(ctx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Arc;

    #[test]
    fn test_push_preserves_order() {
        let mut group = Group::new();
        group.push(Arc::circle(0.0, 0.0, 0.1));
        group.push(Group::new());

        assert_eq!(group.children().len(), 2);
        assert!(matches!(group.children()[0], Node::Arc(_)));
        assert!(matches!(group.children()[1], Node::Group(_)));
    }

    #[test]
    fn test_empty_group_draws_nothing() {
        let mut surface = crate::surface::testing::RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, 64.0, 64.0);
        Group::new().draw(&mut ctx).unwrap();
        drop(ctx);
        assert!(surface.ops.is_empty());
    }
}
