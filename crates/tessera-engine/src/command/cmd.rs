use crate::scene::{CacheSlot, Primitive, SceneManager, Shape};

/// Layer value of a `clear` command that targets every layer.
pub const ALL_LAYERS: &str = "*";

/// What a `clear` command removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearTarget {
    All,
    Layer(String),
}

impl ClearTarget {
    /// `"*"` means every layer, anything else names one.
    pub fn from_layer(layer: String) -> Self {
        if layer == ALL_LAYERS {
            ClearTarget::All
        } else {
            ClearTarget::Layer(layer)
        }
    }
}

/// The command keywords, in registry order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Reset,
    Clear,
    Cache,
    Text,
    Point,
    Line,
    Rect,
    Polyline,
    Polygon,
}

impl CommandKind {
    /// Value of the `command` field that selects this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            CommandKind::Reset => "reset",
            CommandKind::Clear => "clear",
            CommandKind::Cache => "cache",
            CommandKind::Text => "text",
            CommandKind::Point => "point",
            CommandKind::Line => "line",
            CommandKind::Rect => "rect",
            CommandKind::Polyline => "polyline",
            CommandKind::Polygon => "poly",
        }
    }
}

/// One parsed drawing or control instruction.
///
/// Immutable once built and consumed by [`execute`](Self::execute), so each
/// command takes effect exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Reset,
    Clear(ClearTarget),
    /// Snapshot the live scene into a slot.
    Cache(CacheSlot),
    /// Add one primitive (point, line, rect, text, polyline or polygon).
    Draw(Primitive),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Reset => CommandKind::Reset,
            Command::Clear(_) => CommandKind::Clear,
            Command::Cache(_) => CommandKind::Cache,
            Command::Draw(p) => match p.shape {
                Shape::Point(_) => CommandKind::Point,
                Shape::Line(_) => CommandKind::Line,
                Shape::Rect(_) => CommandKind::Rect,
                Shape::Text(_) => CommandKind::Text,
                Shape::Polyline(_) => CommandKind::Polyline,
                Shape::Polygon(_) => CommandKind::Polygon,
            },
        }
    }

    /// Applies the command. Reference errors are logged and leave the scene unchanged.
    pub fn execute(self, scene: &mut SceneManager) {
        match self {
            Command::Reset => scene.reset(),
            Command::Clear(ClearTarget::All) => scene.clear(),
            Command::Clear(ClearTarget::Layer(name)) => scene.clear_layer(&name).unwrap_or_default(),
            Command::Cache(slot) => scene.save_cache_slot(slot),
            Command::Draw(primitive) => scene.add(primitive),
        }
    }
}
