use std::collections::HashMap;

/// Number of visibility categories per layer.
pub const LAYER_CATEGORY_COUNT: usize = 4;

/// Visibility sub-channel of a layer. Every primitive falls into exactly one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LayerCategory {
    Point = 0,
    Line = 1,
    Area = 2,
    Text = 3,
}

impl LayerCategory {
    pub const ALL: [LayerCategory; LAYER_CATEGORY_COUNT] =
        [LayerCategory::Point, LayerCategory::Line, LayerCategory::Area, LayerCategory::Text];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Column header shown by layer tables.
    pub const fn name(self) -> &'static str {
        match self {
            LayerCategory::Point => "Point",
            LayerCategory::Line => "Line",
            LayerCategory::Area => "Area",
            LayerCategory::Text => "Text",
        }
    }
}

/// Aggregate state of a layer's category flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CheckState {
    Checked,
    Unchecked,
    PartiallyChecked,
}

/// Name and per-category visibility of one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerInfo {
    pub name: String,
    pub visibility: [bool; LAYER_CATEGORY_COUNT],
}

impl LayerInfo {
    /// New layer with every category visible.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), visibility: [true; LAYER_CATEGORY_COUNT] }
    }

    #[inline]
    pub fn is_visible(&self, category: LayerCategory) -> bool {
        self.visibility[category.index()]
    }

    /// `Checked` iff every flag is set, `Unchecked` iff none is, else `PartiallyChecked`.
    pub fn all_check_state(&self) -> CheckState {
        if self.visibility.iter().all(|&v| v) {
            CheckState::Checked
        } else if self.visibility.iter().all(|&v| !v) {
            CheckState::Unchecked
        } else {
            CheckState::PartiallyChecked
        }
    }
}

/// Insertion-ordered set of layers keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerRegistry {
    layers: Vec<LayerInfo>,
    index: HashMap<String, usize>,
}

impl LayerRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers in creation order.
    #[inline]
    pub fn layers(&self) -> &[LayerInfo] {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&LayerInfo> {
        self.index.get(name).map(|&i| &self.layers[i])
    }

    /// Registers `name` with all categories visible unless it already exists.
    ///
    /// Returns `true` when a new layer was created.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.insert(LayerInfo::new(name));
        true
    }

    /// Sets one category flag. Returns the updated layer, or `None` if unknown.
    pub fn set_visibility(
        &mut self,
        name: &str,
        category: LayerCategory,
        visible: bool,
    ) -> Option<&LayerInfo> {
        let &i = self.index.get(name)?;
        let layer = &mut self.layers[i];
        layer.visibility[category.index()] = visible;
        Some(layer)
    }

    /// Sets every category flag at once. Returns the updated layer, or `None` if unknown.
    pub fn set_all_visibility(&mut self, name: &str, visible: bool) -> Option<&LayerInfo> {
        let &i = self.index.get(name)?;
        let layer = &mut self.layers[i];
        layer.visibility = [visible; LAYER_CATEGORY_COUNT];
        Some(layer)
    }

    /// Unions `other` into `self`.
    ///
    /// Unknown layers are adopted with their saved flags (appended in `other`'s
    /// order); layers present in both get the per-category OR of their flags.
    /// Returns `true` if anything changed.
    pub fn merge(&mut self, other: &LayerRegistry) -> bool {
        let mut changed = false;
        for incoming in &other.layers {
            match self.index.get(&incoming.name) {
                Some(&i) => {
                    let live = &mut self.layers[i];
                    for (flag, &saved) in live.visibility.iter_mut().zip(&incoming.visibility) {
                        if saved && !*flag {
                            *flag = true;
                            changed = true;
                        }
                    }
                }
                None => {
                    self.insert(incoming.clone());
                    changed = true;
                }
            }
        }
        changed
    }

    /// Unregisters every layer.
    pub fn clear(&mut self) {
        self.layers.clear();
        self.index.clear();
    }

    fn insert(&mut self, info: LayerInfo) {
        self.index.insert(info.name.clone(), self.layers.len());
        self.layers.push(info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── LayerInfo::all_check_state ────────────────────────────────────────

    #[test]
    fn all_check_state_covers_three_states() {
        let mut info = LayerInfo::new("a");
        assert_eq!(info.all_check_state(), CheckState::Checked);

        info.visibility[LayerCategory::Text.index()] = false;
        assert_eq!(info.all_check_state(), CheckState::PartiallyChecked);

        info.visibility = [false; LAYER_CATEGORY_COUNT];
        assert_eq!(info.all_check_state(), CheckState::Unchecked);
    }

    #[test]
    fn category_index_round_trips() {
        for c in LayerCategory::ALL {
            assert_eq!(LayerCategory::from_index(c.index()), Some(c));
        }
        assert_eq!(LayerCategory::from_index(LAYER_CATEGORY_COUNT), None);
    }

    // ── LayerRegistry ─────────────────────────────────────────────────────

    #[test]
    fn ensure_is_idempotent_and_keeps_insertion_order() {
        let mut reg = LayerRegistry::new();
        assert!(reg.ensure("b"));
        assert!(reg.ensure("a"));
        assert!(!reg.ensure("b"));

        let names: Vec<_> = reg.layers().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn set_visibility_unknown_layer_is_none() {
        let mut reg = LayerRegistry::new();
        assert!(reg.set_visibility("ghost", LayerCategory::Line, false).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn set_visibility_updates_single_flag() {
        let mut reg = LayerRegistry::new();
        reg.ensure("a");
        let info = reg.set_visibility("a", LayerCategory::Line, false).unwrap();
        assert_eq!(info.visibility, [true, false, true, true]);
    }

    #[test]
    fn set_all_visibility_overrides_every_flag() {
        let mut reg = LayerRegistry::new();
        reg.ensure("a");
        reg.set_visibility("a", LayerCategory::Line, false);
        let info = reg.set_all_visibility("a", true).unwrap();
        assert_eq!(info.all_check_state(), CheckState::Checked);
    }

    // ── LayerRegistry::merge ──────────────────────────────────────────────

    #[test]
    fn merge_ors_shared_layers_and_adopts_new_ones() {
        let mut live = LayerRegistry::new();
        live.ensure("shared");
        live.set_all_visibility("shared", false);
        live.set_visibility("shared", LayerCategory::Point, true);

        let mut saved = LayerRegistry::new();
        saved.ensure("shared");
        saved.set_all_visibility("shared", false);
        saved.set_visibility("shared", LayerCategory::Text, true);
        saved.ensure("new");
        saved.set_visibility("new", LayerCategory::Area, false);

        assert!(live.merge(&saved));
        assert_eq!(live.get("shared").unwrap().visibility, [true, false, false, true]);
        assert_eq!(live.get("new").unwrap().visibility, [true, true, false, true]);
        assert_eq!(live.layers()[1].name, "new");
    }

    #[test]
    fn merge_without_effect_reports_unchanged() {
        let mut live = LayerRegistry::new();
        live.ensure("a");
        let saved = live.clone();
        assert!(!live.merge(&saved));
    }
}
