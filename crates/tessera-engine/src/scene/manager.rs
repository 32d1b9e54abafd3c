use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde_json::Value;

use crate::command::{Command, CommandParser, ParseError};
use crate::coords::Rect;

use super::area::{AreaPolicy, SceneArea};
use super::cache::{CacheManager, CacheSlot, SceneSnapshot};
use super::config::SceneConfig;
use super::error::SceneError;
use super::event::{ObserverId, Observers, SceneEvent};
use super::layer::{LayerCategory, LayerInfo, LayerRegistry};
use super::primitive::Primitive;
use super::store::SceneStore;

/// Outcome of applying a command stream.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records parsed and executed.
    pub applied: usize,
    /// Records dropped with a parse error.
    pub rejected: usize,
}

/// Owner of all scene state: primitives, layers, cache slots and area policy.
///
/// Construct one per viewer and pass it by reference to whatever feeds it
/// commands or reads it for rendering. Every mutation runs to completion before
/// the next one starts; observers are called synchronously, in subscription
/// order, before the mutating call returns.
///
/// # Example
///
/// ```
/// use tessera_engine::scene::{SceneManager, SceneEvent};
///
/// let mut scene = SceneManager::default();
/// scene.subscribe(|e| if *e == SceneEvent::LayersChanged { println!("relist layers") });
///
/// scene.add_command(r#"{"command":"point","layer":"l1","x":1,"y":2}"#).unwrap();
/// assert_eq!(scene.layers()[0].name, "l1");
/// assert_eq!(scene.primitive_count(), 1);
/// ```
#[derive(Debug)]
pub struct SceneManager {
    config: SceneConfig,
    parser: CommandParser,
    store: SceneStore,
    layers: LayerRegistry,
    cache: CacheManager,
    area: SceneArea,
    observers: Observers,
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl SceneManager {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            parser: CommandParser::new(config.default_color),
            area: SceneArea::new(config.area_policy),
            store: SceneStore::new(),
            layers: LayerRegistry::new(),
            cache: CacheManager::new(),
            observers: Observers::default(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Parser configured with this scene's default color.
    #[inline]
    pub fn parser(&self) -> CommandParser {
        self.parser
    }

    // ── observers ─────────────────────────────────────────────────────────

    /// Registers a callback for every [`SceneEvent`].
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&SceneEvent) + 'static,
    {
        self.observers.subscribe(Box::new(callback))
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ── ingestion ─────────────────────────────────────────────────────────

    /// Parses one JSON record and executes it. A rejected record is logged and
    /// leaves the scene untouched.
    pub fn add_command(&mut self, text: &str) -> Result<(), ParseError> {
        let cmd = self.parser.parse_str(text).inspect_err(|e| warn!("dropped command: {e}"))?;
        self.apply(cmd);
        Ok(())
    }

    /// Like [`add_command`](Self::add_command) for an already decoded record.
    pub fn add_record(&mut self, record: &Value) -> Result<(), ParseError> {
        let cmd = self.parser.parse_value(record).inspect_err(|e| warn!("dropped command: {e}"))?;
        self.apply(cmd);
        Ok(())
    }

    /// Executes a parsed command.
    #[inline]
    pub fn apply(&mut self, cmd: Command) {
        cmd.execute(self);
    }

    /// Applies every record of `text` in order, optionally resetting first.
    pub fn load_str(&mut self, text: &str, reset: bool) -> LoadSummary {
        if reset {
            self.reset();
        }

        let mut summary = LoadSummary::default();
        let mut stream = self.parser.parse_stream(text);
        while let Some(parsed) = stream.next() {
            match parsed {
                Ok(cmd) => {
                    self.apply(cmd);
                    summary.applied += 1;
                }
                Err(e @ ParseError::Json(_)) => {
                    warn!("command stream unreadable after byte {}: {e}", stream.byte_offset());
                    summary.rejected += 1;
                }
                Err(e) => {
                    warn!("dropped command #{}: {e}", summary.applied + summary.rejected + 1);
                    summary.rejected += 1;
                }
            }
        }
        summary
    }

    /// Reads a command file and applies it. See [`load_str`](Self::load_str).
    pub fn load(&mut self, path: impl AsRef<Path>, reset: bool) -> Result<LoadSummary> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read command file {}", path.display()))?;

        let summary = self.load_str(&text, reset);
        info!(
            "loaded {}: {} applied, {} rejected",
            path.display(),
            summary.applied,
            summary.rejected
        );
        Ok(summary)
    }

    // ── scene store ───────────────────────────────────────────────────────

    /// Adds a primitive, creating its layer (all categories visible) if needed.
    pub fn add(&mut self, primitive: Primitive) {
        let created = self.layers.ensure(&primitive.layer);
        if created {
            debug!("layer `{}` created", primitive.layer);
        }
        self.area.grow(primitive.bounds());
        self.store.push(primitive);

        if created {
            self.observers.emit(&SceneEvent::LayersChanged);
        }
        self.observers.emit(&SceneEvent::SceneChanged);
    }

    /// Removes every primitive. Layers and their visibility are kept.
    pub fn clear(&mut self) {
        let removed = self.store.clear();
        debug!("cleared {removed} primitives");
        self.observers.emit(&SceneEvent::SceneChanged);
    }

    /// Removes the primitives of one layer.
    pub fn clear_layer(&mut self, name: &str) -> Result<(), SceneError> {
        if !self.layers.contains(name) {
            let err = SceneError::UnknownLayer(name.to_string());
            warn!("clear ignored: {err}");
            return Err(err);
        }
        let removed = self.store.clear_layer(name);
        debug!("cleared {removed} primitives from layer `{name}`");
        self.observers.emit(&SceneEvent::SceneChanged);
        Ok(())
    }

    /// Drops all primitives and layers. Cache slots are kept.
    pub fn reset(&mut self) {
        self.store.reset();
        self.layers.clear();
        self.area.rebase(None);
        debug!("scene reset");

        self.observers.emit(&SceneEvent::LayersChanged);
        self.observers.emit(&SceneEvent::SceneChanged);
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Layers in creation order.
    #[inline]
    pub fn layers(&self) -> &[LayerInfo] {
        self.layers.layers()
    }

    #[inline]
    pub fn layer(&self, name: &str) -> Option<&LayerInfo> {
        self.layers.get(name)
    }

    pub fn set_layer_visibility(
        &mut self,
        name: &str,
        category: LayerCategory,
        visible: bool,
    ) -> Result<(), SceneError> {
        let info = self.layers.set_visibility(name, category, visible).cloned();
        self.visibility_changed(name, info)
    }

    /// Sets every category of a layer at once (the aggregate toggle).
    pub fn set_layer_visibility_all(&mut self, name: &str, visible: bool) -> Result<(), SceneError> {
        let info = self.layers.set_all_visibility(name, visible).cloned();
        self.visibility_changed(name, info)
    }

    fn visibility_changed(&mut self, name: &str, info: Option<LayerInfo>) -> Result<(), SceneError> {
        match info {
            Some(info) => {
                debug!("layer `{name}` visibility {:?}", info.visibility);
                self.observers.emit(&SceneEvent::LayerVisibilityChanged(info));
                Ok(())
            }
            None => {
                let err = SceneError::UnknownLayer(name.to_string());
                warn!("visibility change ignored: {err}");
                Err(err)
            }
        }
    }

    // ── area ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn area_policy(&self) -> AreaPolicy {
        self.area.policy()
    }

    pub fn set_area_policy(&mut self, policy: AreaPolicy) {
        if self.area.set_policy(policy) {
            debug!("area policy set to {policy}");
            self.observers.emit(&SceneEvent::AreaPolicyChanged(policy));
        }
    }

    /// Scene extent under the current policy; `None` for an empty `Auto` scene.
    #[inline]
    pub fn scene_area(&self) -> Option<Rect> {
        self.area.current()
    }

    // ── cache ─────────────────────────────────────────────────────────────

    /// Deep copy of the current primitives and layer settings.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot { store: self.store.clone(), layers: self.layers.clone() }
    }

    #[inline]
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Saves the scene into slot `id` (1..=4), replacing its previous contents.
    pub fn save_cache(&mut self, id: i64) -> Result<(), SceneError> {
        let slot = CacheSlot::try_from(id).inspect_err(|e| warn!("cache save ignored: {e}"))?;
        self.save_cache_slot(slot);
        Ok(())
    }

    pub fn save_cache_slot(&mut self, slot: CacheSlot) {
        self.cache.save(slot, self.snapshot());
        debug!("saved {} primitives into cache slot {slot}", self.store.len());
    }

    /// Restores slot `id`.
    ///
    /// With `replace`, the live scene becomes exactly the snapshot. Without it,
    /// the snapshot's layers are merged in (new layers adopted, shared layers
    /// get the OR of both visibilities) and its primitives are appended in
    /// their saved paint order.
    pub fn load_cache(&mut self, id: i64, replace: bool) -> Result<(), SceneError> {
        let slot = CacheSlot::try_from(id).inspect_err(|e| warn!("cache load ignored: {e}"))?;
        let Some(snapshot) = self.cache.get(slot) else {
            let err = SceneError::EmptySlot(slot.id());
            warn!("cache load ignored: {err}");
            return Err(err);
        };

        if replace {
            self.store = snapshot.store.clone();
            self.layers = snapshot.layers.clone();
            self.area.rebase(self.store.bounds());
            debug!("replaced scene from cache slot {slot}");

            self.observers.emit(&SceneEvent::LayersChanged);
        } else {
            let mut layers_changed = self.layers.merge(&snapshot.layers);
            for primitive in snapshot.store.iter_in_paint_order() {
                layers_changed |= self.layers.ensure(&primitive.layer);
                self.area.grow(primitive.bounds());
                self.store.push(primitive.clone());
            }
            debug!("merged cache slot {slot} into scene");

            if layers_changed {
                self.observers.emit(&SceneEvent::LayersChanged);
            }
        }
        self.observers.emit(&SceneEvent::SceneChanged);
        Ok(())
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn layer_primitive_count(&self, name: &str) -> usize {
        self.store.layer_len(name)
    }

    /// All primitives in paint order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.store.iter_in_paint_order()
    }

    /// Primitives whose layer shows their category, in paint order.
    pub fn visible_primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.store.iter_in_paint_order().filter(|p| {
            self.layers
                .get(&p.layer)
                .is_none_or(|layer| layer.is_visible(p.category()))
        })
    }
}
