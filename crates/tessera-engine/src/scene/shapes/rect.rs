use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Primitive, Shape};

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub rect: Rect,
}

impl RectShape {
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Primitive {
    /// Rectangle primitive spanning two opposite corners (any order).
    #[inline]
    pub fn rect(layer: impl Into<String>, color: Color, a: Vec2, b: Vec2) -> Self {
        Self::new(layer, color, Shape::Rect(RectShape { rect: Rect::from_corners(a, b) }))
    }
}
