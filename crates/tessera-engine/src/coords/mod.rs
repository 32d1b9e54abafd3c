//! Coordinate and geometry types shared by the scene store and its observers.
//!
//! Scene space:
//! - Unprojected scene units (`f64`), exactly as they arrive in command records
//! - +X right, +Y up; projection to screen space belongs to the renderer
//!
//! Globe scenes use degrees (longitude on X, latitude on Y).

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
