use std::path::Path;

use colored::Colorize;
use lk_core::{NodeId, ScenarioTree};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(content: Option<&Path>, seed: u64) -> Result<(), String> {
    let tree = super::load_tree(content, &mut StdRng::seed_from_u64(seed))?;

    println!("  {} ({} scenarios, depth {})", tree.title().bold(), tree.len(), tree.depth());
    println!();

    print_node(&tree, tree.root());
    Ok(())
}

/// Print a node and its subtree depth-first, left branch first.
fn print_node(tree: &ScenarioTree, id: NodeId) {
    let Some(node) = tree.node(id) else {
        return;
    };
    let scenario = node.scenario();
    let indent = "    ".repeat(node.depth() - 1);
    println!(
        "  {indent}{} {} {}",
        id.to_string().dimmed(),
        scenario.to_string().cyan(),
        format!("±{}", scenario.luck_delta()).yellow(),
    );
    println!("  {indent}   {}", preview(scenario.prompt(), 60));

    if let Some((left, right)) = node.children() {
        print_node(tree, left);
        print_node(tree, right);
    }
}

fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width).collect();
    format!("{}...", cut.trim_end())
}
