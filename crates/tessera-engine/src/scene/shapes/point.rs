use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Primitive, Shape};

/// Single point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PointShape {
    pub at: Vec2,
}

impl PointShape {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_point(self.at)
    }
}

impl Primitive {
    /// Point primitive on `layer`.
    #[inline]
    pub fn point(layer: impl Into<String>, color: Color, at: Vec2) -> Self {
        Self::new(layer, color, Shape::Point(PointShape { at }))
    }
}
