use std::path::Path;

use colored::Colorize;

use super::open_tracker;

pub fn run(store: &Path, amount: i64) -> Result<(), String> {
    let mut tracker = open_tracker(store)?;
    let change = tracker.add_xp(amount).map_err(|e| e.to_string())?;

    if let Some(message) = change.celebration() {
        println!("{}", message.bold().green());
    }

    let status = tracker.status().map_err(|e| e.to_string())?;
    println!("{status}");

    Ok(())
}
