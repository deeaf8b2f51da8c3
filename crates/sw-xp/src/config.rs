//! Tracker configuration.

use crate::level::XP_PER_LEVEL;

/// Store key holding the XP total.
pub const XP_KEY: &str = "scafwording_xp";

/// Store key holding the level.
pub const LEVEL_KEY: &str = "scafwording_level";

/// Configuration for an [`XpTracker`](crate::XpTracker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpConfig {
    /// XP required per level.
    pub xp_per_level: i64,
    /// Store key for the XP total.
    pub xp_key: String,
    /// Store key for the level.
    pub level_key: String,
}

impl Default for XpConfig {
    fn default() -> Self {
        Self {
            xp_per_level: XP_PER_LEVEL,
            xp_key: XP_KEY.to_string(),
            level_key: LEVEL_KEY.to_string(),
        }
    }
}

impl XpConfig {
    /// Set the XP required per level (at least 1).
    pub fn with_xp_per_level(mut self, xp_per_level: i64) -> Self {
        self.xp_per_level = xp_per_level.max(1);
        self
    }

    /// Use different store keys for XP and level.
    pub fn with_keys(mut self, xp_key: impl Into<String>, level_key: impl Into<String>) -> Self {
        self.xp_key = xp_key.into();
        self.level_key = level_key.into();
        self
    }
}
