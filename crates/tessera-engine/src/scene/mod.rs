//! Layered scene model.
//!
//! Responsibilities:
//! - own the live primitives, partitioned by layer (`SceneStore`)
//! - track layer names and per-category visibility (`LayerRegistry`)
//! - snapshot and restore both through four cache slots (`CacheManager`)
//! - notify observers of layer, visibility, area and content changes
//!
//! [`SceneManager`] ties these together and is the single owner of scene state.

mod area;
mod cache;
mod config;
mod error;
mod event;
mod layer;
mod manager;
mod primitive;
mod shape;
mod store;

pub mod shapes;

pub use area::{AreaPolicy, SceneArea};
pub use cache::{CACHE_SLOT_COUNT, CacheManager, CacheSlot, SceneSnapshot};
pub use config::SceneConfig;
pub use error::SceneError;
pub use event::{ObserverId, SceneEvent};
pub use layer::{CheckState, LAYER_CATEGORY_COUNT, LayerCategory, LayerInfo, LayerRegistry};
pub use manager::{LoadSummary, SceneManager};
pub use primitive::Primitive;
pub use shape::Shape;
pub use store::SceneStore;

/// Layer assigned to drawing records that name none.
pub const DEFAULT_LAYER: &str = "default";
