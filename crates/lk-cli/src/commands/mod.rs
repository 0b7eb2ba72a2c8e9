pub mod check;
pub mod content;
pub mod path;
pub mod play;
pub mod simulate;
pub mod tree;

use std::path::Path;

use lk_core::{Chance, ContentTable, ScenarioTree, build_scenario_tree};

/// Load a content file, or the built-in content when none is given.
fn load_content(path: Option<&Path>) -> Result<ContentTable, String> {
    let table = match path {
        Some(path) => ContentTable::from_path(path),
        None => ContentTable::builtin(),
    };
    table.map_err(|e| e.to_string())
}

/// Load content and build its tree, drawing luck deltas from `chance`.
fn load_tree(path: Option<&Path>, chance: &mut impl Chance) -> Result<ScenarioTree, String> {
    let content = load_content(path)?;
    build_scenario_tree(&content, chance).map_err(|e| e.to_string())
}
