use std::collections::HashMap;

use crate::coords::Rect;

use super::Primitive;

/// A primitive together with its global insertion stamp.
#[derive(Debug, Clone)]
struct StoredPrimitive {
    /// Insertion index across all layers; defines paint order.
    order: u64,
    primitive: Primitive,
}

/// Live primitives, partitioned by layer name.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear_layer()` is O(layer size)
/// - paint-order iteration sorts by insertion stamp, O(n log n)
///
/// The store knows nothing about visibility; layer settings live in the
/// [`LayerRegistry`](super::LayerRegistry).
///
/// Equality is observational: two stores are equal when they hold the same
/// primitives in the same paint order. Raw insertion stamps are not compared.
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    by_layer: HashMap<String, Vec<StoredPrimitive>>,
    next_order: u64,
    len: usize,
}

impl SceneStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive to its layer's list. Does not deduplicate.
    pub fn push(&mut self, primitive: Primitive) {
        let order = self.next_order;
        self.next_order += 1;
        self.len += 1;

        self.by_layer
            .entry(primitive.layer.clone())
            .or_default()
            .push(StoredPrimitive { order, primitive });
    }

    /// Removes every primitive. The insertion counter keeps running so paint
    /// order stays monotonic across clears.
    pub fn clear(&mut self) -> usize {
        let removed = self.len;
        self.by_layer.clear();
        self.len = 0;
        removed
    }

    /// Removes the primitives of one layer and returns how many were dropped.
    pub fn clear_layer(&mut self, layer: &str) -> usize {
        let removed = self.by_layer.remove(layer).map_or(0, |items| items.len());
        self.len -= removed;
        removed
    }

    /// Returns to the state of a freshly constructed store.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of primitives on `layer` (0 for unknown layers).
    pub fn layer_len(&self, layer: &str) -> usize {
        self.by_layer.get(layer).map_or(0, Vec::len)
    }

    /// Primitives of one layer in insertion order.
    pub fn layer_primitives<'a>(&'a self, layer: &str) -> impl Iterator<Item = &'a Primitive> + 'a {
        self.by_layer
            .get(layer)
            .into_iter()
            .flat_map(|items| items.iter().map(|s| &s.primitive))
    }

    /// All primitives in paint order (global insertion order, back-to-front).
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &Primitive> {
        let mut items: Vec<&StoredPrimitive> = self.by_layer.values().flatten().collect();
        items.sort_unstable_by_key(|s| s.order);
        items.into_iter().map(|s| &s.primitive)
    }

    /// Union of the bounds of every primitive, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.by_layer
            .values()
            .flatten()
            .map(|s| s.primitive.bounds())
            .reduce(Rect::union)
    }
}

impl PartialEq for SceneStore {
    fn eq(&self, other: &Self) -> bool {
        // Each primitive carries its layer name, so matching paint order also
        // means matching per-layer lists.
        self.len == other.len && self.iter_in_paint_order().eq(other.iter_in_paint_order())
    }
}
