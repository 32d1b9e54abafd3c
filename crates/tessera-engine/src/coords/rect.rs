use super::Vec2;

/// Axis-aligned rectangle in scene units, stored as its two extreme corners.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. Every constructor
/// normalizes, so a rect built from corners given in any order is valid.
/// A rect may be degenerate (zero width and/or height), e.g. the bounds of a point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Builds a rect from two opposite corners in any order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Builds a rect from an origin and a (possibly negative) size.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::from_corners(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    /// Degenerate rect covering exactly one point.
    #[inline]
    pub const fn from_point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest rect containing all `points`. `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut it = points.into_iter();
        let first = Rect::from_point(it.next()?);
        Some(it.fold(first, |acc, p| acc.include(p)))
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Grows the rect so it contains `p`.
    #[inline]
    pub fn include(self, p: Vec2) -> Rect {
        Rect { min: self.min.min(p), max: self.max.max(p) }
    }

    /// Smallest rect containing both `self` and `other`.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        Rect { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Closed containment: `[min, max]` on both axes.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }
}
