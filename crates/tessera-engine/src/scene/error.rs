use std::fmt;

/// A scene operation that referenced something that does not exist or is out of range.
///
/// These never corrupt state: the operation that produced one was a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The named layer is not registered.
    UnknownLayer(String),
    /// Cache slot id outside `[1, CACHE_SLOT_COUNT]`.
    SlotOutOfRange(i64),
    /// Load from a slot that was never saved.
    EmptySlot(u8),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnknownLayer(name) => write!(f, "unknown layer `{name}`"),
            SceneError::SlotOutOfRange(id) => {
                write!(f, "cache slot {id} out of range [1, {}]", super::CACHE_SLOT_COUNT)
            }
            SceneError::EmptySlot(id) => write!(f, "cache slot {id} is empty"),
        }
    }
}

impl std::error::Error for SceneError {}
