use std::path::Path;

use super::open_tracker;

pub fn run(store: &Path, json: bool) -> Result<(), String> {
    let tracker = open_tracker(store)?;
    let status = tracker.status().map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&status)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
    } else {
        println!("{status}");
    }

    Ok(())
}
