//! Color model shared between the command parser, the scene and renderers.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
