use super::area::AreaPolicy;
use super::layer::LayerInfo;

/// Notification emitted by the [`SceneManager`](super::SceneManager).
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The scene area policy changed.
    AreaPolicyChanged(AreaPolicy),
    /// The layer set (or visibility of several layers) changed; relist all layers.
    LayersChanged,
    /// One layer's visibility changed; carries its new state.
    LayerVisibilityChanged(LayerInfo),
    /// Primitives were added or removed; renderers should repaint.
    SceneChanged,
}

/// Handle returned by [`SceneManager::subscribe`](super::SceneManager::subscribe).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registered callbacks, invoked synchronously in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(ObserverId, Box<dyn FnMut(&SceneEvent)>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Box<dyn FnMut(&SceneEvent)>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    pub(crate) fn emit(&mut self, event: &SceneEvent) {
        log::trace!("scene event: {event:?}");
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("count", &self.callbacks.len()).finish()
    }
}
