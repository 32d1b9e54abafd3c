use core::fmt;
use core::str::FromStr;

use crate::coords::{Rect, Vec2};

/// How the scene extent presented to observers is determined.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AreaPolicy {
    /// Grows to include every primitive added since the last reset.
    #[default]
    Auto,
    /// Fixed unit square `[0, 1]²`.
    Unit,
    /// Whole globe in degrees: `[-180, 180] × [-90, 90]`.
    Globe,
}

impl AreaPolicy {
    /// Human-readable label for pickers.
    pub const fn label(self) -> &'static str {
        match self {
            AreaPolicy::Auto => "Increasing",
            AreaPolicy::Unit => "Area [0..1]^2",
            AreaPolicy::Globe => "Globe",
        }
    }
}

impl fmt::Display for AreaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AreaPolicy::Auto => "auto",
            AreaPolicy::Unit => "unit",
            AreaPolicy::Globe => "globe",
        })
    }
}

impl FromStr for AreaPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "increasing" => Ok(AreaPolicy::Auto),
            "unit" | "01" => Ok(AreaPolicy::Unit),
            "globe" => Ok(AreaPolicy::Globe),
            other => Err(format!("unknown area policy `{other}` (expected auto, unit or globe)")),
        }
    }
}

/// Current area policy plus the running extent used by [`AreaPolicy::Auto`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneArea {
    policy: AreaPolicy,
    grown: Option<Rect>,
}

impl SceneArea {
    pub fn new(policy: AreaPolicy) -> Self {
        Self { policy, grown: None }
    }

    #[inline]
    pub fn policy(&self) -> AreaPolicy {
        self.policy
    }

    /// Returns `true` if the policy changed.
    pub fn set_policy(&mut self, policy: AreaPolicy) -> bool {
        let changed = self.policy != policy;
        self.policy = policy;
        changed
    }

    /// Extends the running extent. Non-finite bounds are ignored.
    pub fn grow(&mut self, bounds: Rect) {
        if !bounds.is_finite() {
            return;
        }
        self.grown = Some(match self.grown {
            Some(r) => r.union(bounds),
            None => bounds,
        });
    }

    /// Replaces the running extent, e.g. after the store was swapped wholesale.
    pub fn rebase(&mut self, bounds: Option<Rect>) {
        self.grown = bounds.filter(|r| r.is_finite());
    }

    /// Extent presented to renderers. `None` while an `Auto` scene is still empty.
    pub fn current(&self) -> Option<Rect> {
        match self.policy {
            AreaPolicy::Auto => self.grown,
            AreaPolicy::Unit => Some(Rect::from_corners(Vec2::zero(), Vec2::new(1.0, 1.0))),
            AreaPolicy::Globe => {
                Some(Rect::from_corners(Vec2::new(-180.0, -90.0), Vec2::new(180.0, 90.0)))
            }
        }
    }
}
