use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Primitive, Shape};

/// Open (polyline) or closed (polygon) vertex path.
///
/// Invariant: never empty. Constructors are only reached after the parser
/// checked the minimum vertex count (2 for polylines, 3 for polygons).
#[derive(Debug, Clone, PartialEq)]
pub struct PathShape {
    pub points: Vec<Vec2>,
}

impl PathShape {
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.points.iter().copied()).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Primitive {
    /// Open path through `points`.
    #[inline]
    pub fn polyline(layer: impl Into<String>, color: Color, points: Vec<Vec2>) -> Self {
        Self::new(layer, color, Shape::Polyline(PathShape { points }))
    }

    /// Closed, filled path through `points`.
    #[inline]
    pub fn polygon(layer: impl Into<String>, color: Color, points: Vec<Vec2>) -> Self {
        Self::new(layer, color, Shape::Polygon(PathShape { points }))
    }
}
