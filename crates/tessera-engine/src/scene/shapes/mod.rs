pub(crate) mod line;
pub(crate) mod path;
pub(crate) mod point;
pub(crate) mod rect;
pub(crate) mod text;

pub use line::LineShape;
pub use path::PathShape;
pub use point::PointShape;
pub use rect::RectShape;
pub use text::TextShape;
