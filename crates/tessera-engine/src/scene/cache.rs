use core::fmt;

use super::error::SceneError;
use super::layer::LayerRegistry;
use super::store::SceneStore;

/// Number of snapshot slots.
pub const CACHE_SLOT_COUNT: usize = 4;

/// Validated cache slot id in `[1, CACHE_SLOT_COUNT]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CacheSlot(u8);

impl CacheSlot {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = CACHE_SLOT_COUNT as u8;

    /// Returns `None` for ids outside `[1, 4]`.
    pub fn new(id: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&id) {
            Some(Self(id as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<i64> for CacheSlot {
    type Error = SceneError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        CacheSlot::new(id).ok_or(SceneError::SlotOutOfRange(id))
    }
}

impl fmt::Display for CacheSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deep copy of the scene content and layer settings at capture time.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub store: SceneStore,
    pub layers: LayerRegistry,
}

/// Fixed set of snapshot slots. Slots are independent and never evicted.
#[derive(Debug, Clone, Default)]
pub struct CacheManager {
    slots: [Option<SceneSnapshot>; CACHE_SLOT_COUNT],
}

impl CacheManager {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `snapshot` in `slot`, replacing previous contents.
    pub fn save(&mut self, slot: CacheSlot, snapshot: SceneSnapshot) {
        self.slots[slot.index()] = Some(snapshot);
    }

    #[inline]
    pub fn get(&self, slot: CacheSlot) -> Option<&SceneSnapshot> {
        self.slots[slot.index()].as_ref()
    }

    #[inline]
    pub fn is_filled(&self, slot: CacheSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Ids of every non-empty slot, ascending.
    pub fn filled_slots(&self) -> Vec<u8> {
        (CacheSlot::MIN..=CacheSlot::MAX)
            .filter(|&id| self.slots[(id - CacheSlot::MIN) as usize].is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_layer(name: &str) -> SceneSnapshot {
        let mut layers = LayerRegistry::new();
        layers.ensure(name);
        SceneSnapshot { store: SceneStore::new(), layers }
    }

    #[test]
    fn slot_ids_are_restricted_to_one_through_four() {
        assert!(CacheSlot::new(0).is_none());
        assert!(CacheSlot::new(5).is_none());
        assert!(CacheSlot::new(-1).is_none());
        for id in 1..=4 {
            assert_eq!(CacheSlot::new(id).unwrap().id() as i64, id);
        }
        assert_eq!(CacheSlot::try_from(9), Err(SceneError::SlotOutOfRange(9)));
    }

    #[test]
    fn save_overwrites_only_its_slot() {
        let mut cache = CacheManager::new();
        let s2 = CacheSlot::new(2).unwrap();
        let s3 = CacheSlot::new(3).unwrap();

        cache.save(s2, snapshot_with_layer("first"));
        cache.save(s3, snapshot_with_layer("other"));
        cache.save(s2, snapshot_with_layer("second"));

        assert!(cache.get(s2).unwrap().layers.contains("second"));
        assert!(!cache.get(s2).unwrap().layers.contains("first"));
        assert!(cache.get(s3).unwrap().layers.contains("other"));
        assert_eq!(cache.filled_slots(), [2, 3]);
    }

    #[test]
    fn fresh_manager_has_no_filled_slots() {
        let cache = CacheManager::new();
        assert!(cache.filled_slots().is_empty());
        assert!(!cache.is_filled(CacheSlot::new(1).unwrap()));
    }
}
