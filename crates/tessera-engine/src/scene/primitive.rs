use crate::coords::Rect;
use crate::paint::Color;

use super::layer::LayerCategory;
use super::Shape;

/// A renderable shape bound to exactly one layer and one color.
///
/// Primitives are created by command execution and owned by the
/// [`SceneStore`](super::SceneStore). Per-shape constructors live next to each
/// shape under `scene::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub layer: String,
    pub color: Color,
    pub shape: Shape,
}

impl Primitive {
    #[inline]
    pub fn new(layer: impl Into<String>, color: Color, shape: Shape) -> Self {
        Self { layer: layer.into(), color, shape }
    }

    #[inline]
    pub fn category(&self) -> LayerCategory {
        self.shape.category()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }
}
