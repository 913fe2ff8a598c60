//! The four rule toggles.

use serde::{Deserialize, Serialize};

/// Rule variant toggles controlling move legality.
///
/// Serialized with camelCase keys so the persisted record reads
/// `{"flyingKings": .., "backwardsCapture": .., "multipleCapture": .., "forceCapture": ..}`.
/// Missing keys fall back to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleConfig {
    /// Kings slide any distance and capture at range.
    pub flying_kings: bool,
    /// Men may also capture toward their own back rank.
    pub backwards_capture: bool,
    /// A capturing piece keeps jumping while it can.
    pub multiple_capture: bool,
    /// Pieces with a capture must be chosen over pieces without one.
    pub force_capture: bool,
}

impl RuleConfig {
    /// All four rules enabled.
    pub const ALL_ENABLED: RuleConfig = RuleConfig {
        flying_kings: true,
        backwards_capture: true,
        multiple_capture: true,
        force_capture: true,
    };

    /// All four rules disabled.
    pub const ALL_DISABLED: RuleConfig = RuleConfig {
        flying_kings: false,
        backwards_capture: false,
        multiple_capture: false,
        force_capture: false,
    };

    /// Returns one sentence per rule describing the current setting.
    pub fn describe(&self) -> [&'static str; 4] {
        [
            if self.flying_kings {
                "Kings can move any distance diagonally if unobstructed"
            } else {
                "Kings can only move one square diagonally"
            },
            if self.backwards_capture {
                "Regular pieces can capture backwards"
            } else {
                "Regular pieces cannot capture backwards"
            },
            if self.multiple_capture {
                "Multiple jumps in a single turn are allowed and required when possible"
            } else {
                "Only one jump is allowed per turn"
            },
            if self.force_capture {
                "If a jump is available, you must take it"
            } else {
                "Jumping is optional"
            },
        ]
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::ALL_ENABLED
    }
}
