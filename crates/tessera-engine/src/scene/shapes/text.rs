use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Primitive, Shape};

/// Text label anchored at a scene position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub text: String,
    /// Anchor of the label in scene units.
    pub at: Vec2,
}

impl TextShape {
    /// Glyph extents depend on the renderer's font, so only the anchor counts.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_point(self.at)
    }
}

impl Primitive {
    /// Text primitive on `layer`.
    #[inline]
    pub fn text(layer: impl Into<String>, color: Color, at: Vec2, text: impl Into<String>) -> Self {
        Self::new(layer, color, Shape::Text(TextShape { text: text.into(), at }))
    }
}
