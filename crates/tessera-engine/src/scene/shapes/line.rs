use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Primitive, Shape};

/// Straight segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub from: Vec2,
    pub to: Vec2,
}

impl LineShape {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.from, self.to)
    }
}

impl Primitive {
    /// Line primitive on `layer`.
    #[inline]
    pub fn line(layer: impl Into<String>, color: Color, from: Vec2, to: Vec2) -> Self {
        Self::new(layer, color, Shape::Line(LineShape { from, to }))
    }
}
