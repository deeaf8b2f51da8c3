use std::fs;
use std::path::Path;

use sw_xp::{ElementMap, render_xp};

use super::open_tracker;

pub fn run(store: &Path, page_path: &Path, element: &str) -> Result<(), String> {
    let text = fs::read_to_string(page_path)
        .map_err(|e| format!("cannot read {}: {e}", page_path.display()))?;
    let mut page: ElementMap = serde_json::from_str(&text)
        .map_err(|e| format!("invalid page {}: {e}", page_path.display()))?;

    let tracker = open_tracker(store)?;
    let rendered = render_xp(&tracker, &mut page, Some(element)).map_err(|e| e.to_string())?;
    if !rendered {
        tracing::debug!(
            element,
            page = %page_path.display(),
            "element not on page, nothing rendered"
        );
        return Ok(());
    }

    let out = serde_json::to_string_pretty(&page)
        .map_err(|e| format!("JSON serialization failed: {e}"))?;
    fs::write(page_path, out)
        .map_err(|e| format!("cannot write {}: {e}", page_path.display()))?;

    Ok(())
}
