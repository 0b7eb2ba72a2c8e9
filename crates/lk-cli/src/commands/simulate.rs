use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lk_core::Choice;
use lk_session::{GameSession, LuckBand, Phase, SessionConfig};

pub fn run(content: Option<&Path>, games: u32, seed: u64) -> Result<(), String> {
    let mut tree_rng = StdRng::seed_from_u64(seed);
    let tree = Arc::new(super::load_tree(content, &mut tree_rng)?);

    // Choices come from their own stream so they do not shift the session's draws.
    let mut picker = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = GameSession::new(tree, SessionConfig::default().with_seed(seed));

    let mut counts: HashMap<LuckBand, u32> = HashMap::new();
    let mut lowest = i64::MAX;
    let mut highest = i64::MIN;
    let mut total: i64 = 0;

    for _ in 0..games {
        let band = autoplay(&mut session, &mut picker).map_err(|e| e.to_string())?;
        let luck = session.luck().value();
        *counts.entry(band).or_default() += 1;
        lowest = lowest.min(luck);
        highest = highest.max(luck);
        total += luck;
        session.play_again().map_err(|e| e.to_string())?;
    }

    println!(
        "  {} {games} games of '{}' (seed {seed})",
        "Simulated".bold(),
        session.tree().title()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Band", "Games", "Share"]);
    for band in LuckBand::ALL {
        let n = counts.get(&band).copied().unwrap_or(0);
        table.add_row(vec![
            band.to_string(),
            n.to_string(),
            format!("{:.1}%", percent(n, games)),
        ]);
    }
    println!("{table}");

    if games > 0 {
        println!();
        println!(
            "  Final luck: min {lowest}, max {highest}, mean {:.1}",
            total as f64 / f64::from(games)
        );
    }

    Ok(())
}

/// Play one game from the start screen to the end screen with random choices.
fn autoplay(
    session: &mut GameSession,
    picker: &mut StdRng,
) -> lk_session::SessionResult<LuckBand> {
    session.start()?;
    let mut phase = session.begin()?;
    loop {
        match phase {
            Phase::End { band } => return Ok(band),
            Phase::Scenario { .. } => {
                let choice = if picker.random_bool(0.5) {
                    Choice::First
                } else {
                    Choice::Second
                };
                session.choose(choice)?;
                phase = session.proceed()?;
            }
            _ => phase = session.proceed()?,
        }
    }
}

fn percent(n: u32, of: u32) -> f64 {
    if of == 0 {
        0.0
    } else {
        f64::from(n) * 100.0 / f64::from(of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_zero_games() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }
}
