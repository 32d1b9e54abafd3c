use crate::coords::Rect;
use crate::scene::layer::LayerCategory;
use crate::scene::shapes::line::LineShape;
use crate::scene::shapes::path::PathShape;
use crate::scene::shapes::point::PointShape;
use crate::scene::shapes::rect::RectShape;
use crate::scene::shapes::text::TextShape;

/// Renderer-agnostic geometry of a primitive.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and map it to a [`LayerCategory`]
/// - implement the `Primitive` constructor inside that shape module
/// - register a recognizer in `command::parse`
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(PointShape),
    Line(LineShape),
    Rect(RectShape),
    Text(TextShape),
    Polyline(PathShape),
    Polygon(PathShape),
}

impl Shape {
    /// Visibility category that gates this shape.
    pub fn category(&self) -> LayerCategory {
        match self {
            Shape::Point(_) => LayerCategory::Point,
            Shape::Line(_) | Shape::Polyline(_) => LayerCategory::Line,
            Shape::Rect(_) | Shape::Polygon(_) => LayerCategory::Area,
            Shape::Text(_) => LayerCategory::Text,
        }
    }

    /// Extent in scene units. Text contributes only its anchor point.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Point(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Rect(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
            Shape::Polyline(s) | Shape::Polygon(s) => s.bounds(),
        }
    }
}
