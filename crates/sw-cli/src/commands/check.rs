use std::path::Path;

use colored::Colorize;

use super::open_tracker;

pub fn run(store: &Path) -> Result<(), String> {
    let tracker = open_tracker(store)?;

    match tracker.level_drift().map_err(|e| e.to_string())? {
        None => println!("{} level matches XP", "ok".green()),
        Some(drift) => println!(
            "{} stored level {} but XP gives level {}",
            "drift".yellow(),
            drift.stored,
            drift.computed
        ),
    }

    Ok(())
}
