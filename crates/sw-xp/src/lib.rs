//! Experience points and level tracking for Scafwording.
//!
//! Keeps a cumulative XP counter and a derived level in a pluggable
//! key-value store, and renders a one-line status into a page element.
//! Ships with an in-memory store and a JSON file store.

pub mod config;
pub mod error;
pub mod level;
pub mod render;
pub mod resolve;
pub mod store;
pub mod tracker;

pub use config::XpConfig;
pub use error::{XpError, XpResult};
pub use level::{XP_PER_LEVEL, level_for_xp, xp_to_next_level};
pub use render::{DEFAULT_ELEMENT_ID, ElementMap, Page, TextElement, render_xp};
pub use resolve::parse_stored_integer;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::{LevelChange, LevelDrift, XpStatus, XpTracker};
