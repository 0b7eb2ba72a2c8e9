//! Core types for Luckometer: scenarios, the scenario tree, and playthroughs.
//!
//! A game is a random walk through a binary tree of [`Scenario`]s. The tree
//! is built once from a [`ContentTable`] with [`build_scenario_tree`]; each
//! playthrough picks a root-to-leaf [`Path`] with [`select_path`] and
//! linearizes it into a [`Playthrough`]. Choices resolve through
//! [`resolve_outcome`]. All randomness flows through the [`Chance`] trait.

/// Random sources: seeded RNGs and scripted values for tests.
pub mod chance;
/// Authored content tables and their validation.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Outcome resolution for a chosen option.
pub mod outcome;
/// Random root-to-leaf path selection.
pub mod path;
/// Forward-only playthrough sequences.
pub mod playthrough;
/// Scenario records, choices, and luck deltas.
pub mod scenario;
/// The scenario tree arena.
pub mod tree;

/// Re-export random sources.
pub use chance::{Chance, ScriptedChance};
/// Re-export content types.
pub use content::{ContentTable, ScenarioContent};
/// Re-export error types.
pub use error::{ScenarioError, ScenarioResult};
/// Re-export outcome types.
pub use outcome::{Outcome, Resolution, Sign, resolve_outcome};
/// Re-export path types.
pub use path::{Branch, Path, select_path};
/// Re-export playthrough types.
pub use playthrough::{Playthrough, build_sequence};
/// Re-export scenario types.
pub use scenario::{Choice, ChoiceOption, LuckDelta, Scenario};
/// Re-export tree types.
pub use tree::{NodeId, ScenarioTree, TreeNode, build_scenario_tree};
