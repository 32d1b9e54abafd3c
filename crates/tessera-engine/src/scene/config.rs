use crate::paint::Color;

use super::area::AreaPolicy;

/// Scene manager configuration.
///
/// `default_color` applies to drawing records without a usable `color`;
/// `area_policy` is the policy the scene starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub default_color: Color,
    pub area_policy: AreaPolicy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            default_color: Color::WHITE,
            area_policy: AreaPolicy::Auto,
        }
    }
}

impl SceneConfig {
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    pub fn with_area_policy(mut self, policy: AreaPolicy) -> Self {
        self.area_policy = policy;
        self
    }
}
