pub mod add;
pub mod check;
pub mod render;
pub mod show;
pub mod status;

use std::path::Path;

use sw_xp::{FileStore, XpTracker};

/// Open the tracker backed by the store file at `path`.
fn open_tracker(path: &Path) -> Result<XpTracker<FileStore>, String> {
    let store = FileStore::open(path).map_err(|e| e.to_string())?;
    Ok(XpTracker::new(store))
}
