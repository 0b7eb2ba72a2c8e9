use std::path::Path;

use lk_core::ContentTable;

pub fn run(file: &Path) -> Result<(), String> {
    let content = ContentTable::from_path(file).map_err(|e| e.to_string())?;

    println!("  All checks passed for '{}'.", content.title);
    println!(
        "  {} scenarios, {} levels deep",
        content.scenario_count(),
        content.depth()
    );

    Ok(())
}
