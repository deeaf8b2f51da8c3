//! Single-value reads.

use std::path::Path;

use super::open_tracker;

pub fn xp(store: &Path) -> Result<(), String> {
    let tracker = open_tracker(store)?;
    println!("{}", tracker.xp().map_err(|e| e.to_string())?);
    Ok(())
}

pub fn level(store: &Path) -> Result<(), String> {
    let tracker = open_tracker(store)?;
    println!("{}", tracker.level().map_err(|e| e.to_string())?);
    Ok(())
}

pub fn next(store: &Path) -> Result<(), String> {
    let tracker = open_tracker(store)?;
    println!("{}", tracker.xp_for_next_level().map_err(|e| e.to_string())?);
    Ok(())
}
