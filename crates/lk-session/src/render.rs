//! Plain-text rendering of each screen.

use lk_core::{Choice, Resolution, Scenario, ScenarioTree, Sign};

use crate::luck::{LuckBand, LuckScore};

/// The title screen.
pub fn start_screen(tree: &ScenarioTree) -> String {
    format!(
        "=== {} ===\n\n  start    Begin a new day\n  resume   Return to your day\n  quit     Leave the game",
        tree.title().to_uppercase()
    )
}

/// The instructions screen.
pub fn instructions_screen(tree: &ScenarioTree) -> String {
    let mut out = String::from("--- How to play ---\n");
    if !tree.instructions().is_empty() {
        out.push_str(tree.instructions());
        out.push('\n');
    }
    out.push_str("\nType 'begin' when you are ready.");
    out
}

/// A scenario awaiting a choice.
pub fn scenario_screen(scenario: &Scenario, luck: LuckScore, index: usize, total: usize) -> String {
    let mut out = format!("Luck Score: {luck}    [{}/{total}]\n\n", index + 1);
    out.push_str(scenario.prompt());
    out.push_str("\n\n");
    for choice in Choice::ALL {
        out.push_str(&format!(
            "  {}. {}\n",
            choice.number(),
            scenario.choice(choice).label
        ));
    }
    out.push_str(&format!("\n(image: {})", scenario.image()));
    out
}

/// The result of a choice.
pub fn outcome_screen(resolution: &Resolution, luck: LuckScore) -> String {
    let sign = match resolution.sign() {
        Sign::Positive => '+',
        Sign::Negative => '-',
    };
    format!(
        "Luck Score: {luck}\n\n{}\n\nLuck {sign}{}\n\nType 'continue' to go on.",
        resolution.text(),
        resolution.delta
    )
}

/// The end-of-day summary.
pub fn end_screen(luck: LuckScore, band: LuckBand) -> String {
    format!(
        "Your Final Luck Score is {luck}.\n{}\n\n  again    Play again\n  quit     Leave the game",
        band.message()
    )
}
