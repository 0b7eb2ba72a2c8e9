use std::path::Path;

use colored::Colorize;
use lk_core::{build_sequence, select_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(content: Option<&Path>, seed: u64, count: usize) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let tree = super::load_tree(content, &mut rng)?;

    println!("  {} paths through '{}' (seed {seed})", count, tree.title());
    println!();

    for n in 1..=count {
        let path = select_path(&tree, &mut rng);
        let route: String = path.branches().iter().map(|b| b.to_string()).collect();
        let deltas: Vec<String> = path
            .scenarios()
            .iter()
            .map(|s| format!("±{}", s.luck_delta()))
            .collect();

        let playthrough = build_sequence(Some(path.into_scenarios())).map_err(|e| e.to_string())?;
        let stops: Vec<String> = playthrough.to_list().iter().map(|s| s.to_string()).collect();

        println!(
            "  {:>3}. {:<4} {}",
            n,
            route.bold(),
            stops.join(" -> ")
        );
        println!("       {}", deltas.join(" ").yellow());
    }

    Ok(())
}
