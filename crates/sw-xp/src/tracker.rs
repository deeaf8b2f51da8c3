//! The XP tracker.
//!
//! `XpTracker` reads and writes two keys in a [`KeyValueStore`]: the XP
//! total and the level derived from it. Both are rewritten together on
//! every [`XpTracker::add_xp`]; reads never write.

use serde::Serialize;

use crate::config::XpConfig;
use crate::error::XpResult;
use crate::level::{level_for_xp, xp_to_next_level};
use crate::resolve::parse_stored_integer;
use crate::store::KeyValueStore;

/// XP total assumed when nothing is stored.
const DEFAULT_XP: i64 = 0;

/// Level assumed when nothing is stored.
const DEFAULT_LEVEL: i64 = 1;

/// Tracks XP and level for a single user.
#[derive(Debug)]
pub struct XpTracker<S> {
    store: S,
    config: XpConfig,
}

impl<S: KeyValueStore> XpTracker<S> {
    /// Create a tracker over `store` with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, XpConfig::default())
    }

    /// Create a tracker over `store` with a custom configuration.
    pub fn with_config(store: S, config: XpConfig) -> Self {
        Self { store, config }
    }

    /// The tracker configuration.
    pub fn config(&self) -> &XpConfig {
        &self.config
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the tracker and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Add `amount` XP (negative amounts subtract) and store the new level.
    ///
    /// Returns what changed so the caller can decide whether to celebrate.
    pub fn add_xp(&mut self, amount: i64) -> XpResult<LevelChange> {
        let previous_xp = self.xp()?;
        let xp = previous_xp.saturating_add(amount);
        let per_level = self.config.xp_per_level;
        let new_level = level_for_xp(xp, per_level);
        let old_level = level_for_xp(previous_xp, per_level);

        let xp_value = xp.to_string();
        let level_value = new_level.to_string();
        self.store.set_many(&[
            (self.config.xp_key.as_str(), xp_value.as_str()),
            (self.config.level_key.as_str(), level_value.as_str()),
        ])?;

        tracing::debug!(amount, previous_xp, xp, level = new_level, "xp updated");
        let change = LevelChange {
            previous_xp,
            xp,
            old_level,
            new_level,
        };
        if change.leveled_up() {
            tracing::info!(from = old_level, to = new_level, "level up");
        }
        Ok(change)
    }

    /// Stored XP total, or 0.
    pub fn xp(&self) -> XpResult<i64> {
        self.read(&self.config.xp_key, DEFAULT_XP)
    }

    /// Stored level, or 1. Trusts the last written value rather than
    /// recomputing it from XP.
    pub fn level(&self) -> XpResult<i64> {
        self.read(&self.config.level_key, DEFAULT_LEVEL)
    }

    /// XP needed to reach the next level. A full level's worth right
    /// after leveling up.
    pub fn xp_for_next_level(&self) -> XpResult<i64> {
        Ok(xp_to_next_level(self.xp()?, self.config.xp_per_level))
    }

    /// Level derived from the stored XP total.
    pub fn computed_level(&self) -> XpResult<i64> {
        Ok(level_for_xp(self.xp()?, self.config.xp_per_level))
    }

    /// Compare the stored level with the one derived from XP. `None` when
    /// they agree.
    pub fn level_drift(&self) -> XpResult<Option<LevelDrift>> {
        let stored = self.level()?;
        let computed = self.computed_level()?;
        Ok((stored != computed).then_some(LevelDrift { stored, computed }))
    }

    /// Snapshot of level, XP and distance to the next level.
    pub fn status(&self) -> XpResult<XpStatus> {
        Ok(XpStatus {
            level: self.level()?,
            xp: self.xp()?,
            to_next: self.xp_for_next_level()?,
        })
    }

    fn read(&self, key: &str, default: i64) -> XpResult<i64> {
        let raw = self.store.get(key)?;
        Ok(parse_stored_integer(key, raw.as_deref(), default))
    }
}

/// Outcome of a single [`XpTracker::add_xp`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelChange {
    /// XP before the addition.
    pub previous_xp: i64,
    /// XP after the addition.
    pub xp: i64,
    /// Level for the XP before the addition.
    pub old_level: i64,
    /// Level for the XP after the addition.
    pub new_level: i64,
}

impl LevelChange {
    /// Whether the addition crossed into a higher level.
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.old_level
    }

    /// Celebration message, if the addition leveled up.
    pub fn celebration(&self) -> Option<String> {
        self.leveled_up()
            .then(|| format!("🎉 Level Up! You are now Level {}!", self.new_level))
    }
}

/// A stored level that disagrees with the stored XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelDrift {
    /// Level as stored.
    pub stored: i64,
    /// Level derived from the stored XP.
    pub computed: i64,
}

/// Point-in-time view of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpStatus {
    /// Stored level.
    pub level: i64,
    /// Stored XP total.
    pub xp: i64,
    /// XP needed for the next level.
    pub to_next: i64,
}

impl std::fmt::Display for XpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level {} • {} XP ({} to next)",
            self.level, self.xp, self.to_next
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use proptest::prelude::*;

    fn tracker_at(xp: i64) -> XpTracker<MemoryStore> {
        let mut tracker = XpTracker::new(MemoryStore::new());
        if xp != 0 {
            tracker.add_xp(xp).unwrap();
        }
        tracker
    }

    #[test]
    fn empty_store_defaults() {
        let tracker = XpTracker::new(MemoryStore::new());
        assert_eq!(tracker.xp().unwrap(), 0);
        assert_eq!(tracker.level().unwrap(), 1);
        assert_eq!(tracker.xp_for_next_level().unwrap(), 100);
    }

    #[test]
    fn add_writes_both_keys() {
        let mut tracker = XpTracker::new(MemoryStore::new());
        tracker.add_xp(150).unwrap();
        let store = tracker.into_store();
        assert_eq!(store.get("scafwording_xp").unwrap().as_deref(), Some("150"));
        assert_eq!(store.get("scafwording_level").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn boundary_shows_full_level_to_next() {
        let mut tracker = tracker_at(90);
        let change = tracker.add_xp(10).unwrap();
        assert!(change.leveled_up());
        assert_eq!(tracker.xp().unwrap(), 100);
        assert_eq!(tracker.level().unwrap(), 2);
        assert_eq!(tracker.xp_for_next_level().unwrap(), 100);
    }

    #[test]
    fn level_up_detected() {
        let mut tracker = tracker_at(95);
        let change = tracker.add_xp(10).unwrap();
        assert_eq!(change.old_level, 1);
        assert_eq!(change.new_level, 2);
        assert_eq!(
            change.celebration().as_deref(),
            Some("🎉 Level Up! You are now Level 2!")
        );
    }

    #[test]
    fn no_level_up_within_level() {
        let mut tracker = tracker_at(10);
        let change = tracker.add_xp(5).unwrap();
        assert!(!change.leveled_up());
        assert_eq!(change.celebration(), None);
        assert_eq!(change.previous_xp, 10);
        assert_eq!(change.xp, 15);
    }

    #[test]
    fn multi_level_jump() {
        let mut tracker = tracker_at(50);
        let change = tracker.add_xp(260).unwrap();
        assert_eq!(change.old_level, 1);
        assert_eq!(change.new_level, 4);
        assert!(change.leveled_up());
    }

    #[test]
    fn negative_amount_is_not_clamped() {
        let mut tracker = tracker_at(30);
        let change = tracker.add_xp(-50).unwrap();
        assert_eq!(change.xp, -20);
        assert!(!change.leveled_up());
        assert_eq!(tracker.xp().unwrap(), -20);
        assert_eq!(tracker.computed_level().unwrap(), 0);
        // A stored level of 0 reads back as the default.
        assert_eq!(tracker.level().unwrap(), 1);
    }

    #[test]
    fn losing_a_level_is_not_a_level_up() {
        let mut tracker = tracker_at(120);
        let change = tracker.add_xp(-30).unwrap();
        assert_eq!(change.old_level, 2);
        assert_eq!(change.new_level, 1);
        assert!(!change.leveled_up());
    }

    #[test]
    fn unparseable_values_fall_back() {
        let store: MemoryStore = [
            ("scafwording_xp", "lots"),
            ("scafwording_level", "high"),
        ]
        .into_iter()
        .collect();
        let mut tracker = XpTracker::new(store);
        assert_eq!(tracker.xp().unwrap(), 0);
        assert_eq!(tracker.level().unwrap(), 1);

        tracker.add_xp(20).unwrap();
        assert_eq!(tracker.xp().unwrap(), 20);
    }

    /// Memory store that refuses writes to one key once armed.
    #[derive(Default)]
    struct FailingStore {
        inner: MemoryStore,
        fail_key: Option<&'static str>,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> XpResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> XpResult<()> {
            if self.fail_key == Some(key) {
                return Err(crate::XpError::Io {
                    path: "failing".into(),
                    source: std::io::Error::other("write refused"),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> XpResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_level_write_keeps_previous_state() {
        let mut tracker = XpTracker::new(FailingStore::default());
        tracker.add_xp(50).unwrap();

        let mut store = tracker.into_store();
        store.fail_key = Some("scafwording_level");
        let mut tracker = XpTracker::new(store);

        assert!(tracker.add_xp(100).is_err());
        assert_eq!(tracker.xp().unwrap(), 50);
        assert_eq!(tracker.level().unwrap(), 1);
        assert_eq!(tracker.level_drift().unwrap(), None);
    }

    #[test]
    fn failed_first_write_on_fresh_store_leaves_it_empty() {
        let store = FailingStore {
            fail_key: Some("scafwording_level"),
            ..FailingStore::default()
        };
        let mut tracker = XpTracker::new(store);

        assert!(tracker.add_xp(150).is_err());
        assert!(tracker.store().inner.is_empty());
    }

    #[test]
    fn stored_level_is_trusted() {
        let store: MemoryStore = [("scafwording_xp", "250"), ("scafwording_level", "7")]
            .into_iter()
            .collect();
        let tracker = XpTracker::new(store);
        assert_eq!(tracker.level().unwrap(), 7);
        assert_eq!(tracker.computed_level().unwrap(), 3);
        assert_eq!(
            tracker.level_drift().unwrap(),
            Some(LevelDrift {
                stored: 7,
                computed: 3
            })
        );
    }

    #[test]
    fn no_drift_after_add() {
        let tracker = tracker_at(420);
        assert_eq!(tracker.level_drift().unwrap(), None);
    }

    #[test]
    fn custom_config() {
        let config = XpConfig::default()
            .with_xp_per_level(200)
            .with_keys("xp", "lvl");
        let mut tracker = XpTracker::with_config(MemoryStore::new(), config);
        tracker.add_xp(450).unwrap();
        assert_eq!(tracker.level().unwrap(), 3);
        assert_eq!(tracker.xp_for_next_level().unwrap(), 150);
        assert_eq!(tracker.store().get("lvl").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn status_display() {
        let tracker = tracker_at(150);
        let status = tracker.status().unwrap();
        assert_eq!(status.to_string(), "Level 2 • 150 XP (50 to next)");
    }

    #[test]
    fn status_serializes() {
        let status = tracker_at(5).status().unwrap();
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["xp"], 5);
        assert_eq!(json["to_next"], 95);
    }

    proptest! {
        #[test]
        fn fresh_add_sets_xp_and_level(a in 0i64..1_000_000) {
            let mut tracker = XpTracker::new(MemoryStore::new());
            tracker.add_xp(a).unwrap();
            prop_assert_eq!(tracker.xp().unwrap(), a);
            prop_assert_eq!(tracker.level().unwrap(), a / 100 + 1);
        }

        #[test]
        fn additions_compose(start in 0i64..10_000, a in -5_000i64..5_000, b in -5_000i64..5_000) {
            let mut split = tracker_at(start);
            split.add_xp(a).unwrap();
            split.add_xp(b).unwrap();

            let mut joined = tracker_at(start);
            joined.add_xp(a + b).unwrap();

            prop_assert_eq!(split.xp().unwrap(), joined.xp().unwrap());
            prop_assert_eq!(split.level().unwrap(), joined.level().unwrap());
        }

        #[test]
        fn reads_are_idempotent(start in -10_000i64..10_000) {
            let tracker = tracker_at(start);
            prop_assert_eq!(tracker.status().unwrap(), tracker.status().unwrap());
        }

        #[test]
        fn level_up_iff_boundary_crossed(start in 0i64..10_000, amount in 0i64..1_000) {
            let mut tracker = tracker_at(start);
            let change = tracker.add_xp(amount).unwrap();
            prop_assert_eq!(change.leveled_up(), (start + amount) / 100 > start / 100);
        }

        #[test]
        fn to_next_is_in_range(start in 0i64..10_000) {
            let to_next = tracker_at(start).xp_for_next_level().unwrap();
            prop_assert!((1..=100).contains(&to_next));
        }

        #[test]
        fn to_next_for_negative_xp_exceeds_a_level(start in -10_000i64..0) {
            let to_next = tracker_at(start).xp_for_next_level().unwrap();
            prop_assert!((100..200).contains(&to_next));
        }
    }
}
