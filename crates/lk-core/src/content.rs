//! Authored scenario content.
//!
//! A [`ContentTable`] is plain data: a title, instruction text, and a nested
//! tree of [`ScenarioContent`] records. It is validated on load and turned
//! into a [`ScenarioTree`](crate::tree::ScenarioTree) by
//! [`build_scenario_tree`](crate::tree::build_scenario_tree).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{Choice, ChoiceOption};

const BUILTIN: &str = include_str!("../content/workday.json");

/// Authored data for one scenario and the branches beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioContent {
    /// Display identifier; siblings may share one.
    pub id: u32,
    /// Opaque artwork reference.
    pub image: String,
    /// Setup text.
    pub prompt: String,
    /// Exactly two options.
    pub choices: [ChoiceOption; 2],
    /// Either zero or two follow-up scenarios, left first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<ScenarioContent>,
}

/// A complete set of authored content for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTable {
    /// Game title.
    pub title: String,
    /// Text shown on the instructions screen.
    #[serde(default)]
    pub instructions: String,
    /// The first scenario of every playthrough.
    pub root: ScenarioContent,
}

impl ContentTable {
    /// The built-in "day at work" content.
    pub fn builtin() -> ScenarioResult<Self> {
        Self::from_json(BUILTIN)
    }

    /// Parse and validate content from JSON.
    pub fn from_json(json: &str) -> ScenarioResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Read, parse, and validate a content file.
    pub fn from_path(path: &Path) -> ScenarioResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json(&self) -> ScenarioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every structural and authoring invariant.
    ///
    /// Each node must have zero or two branches, all leaves must sit at the
    /// same depth, no text may be blank, and the positive and negative text
    /// of a choice must differ.
    pub fn validate(&self) -> ScenarioResult<()> {
        let mut leaf_depth = None;
        check_node(&self.root, "root".to_string(), 1, &mut leaf_depth)
    }

    /// Number of levels from root to leaf.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut node = &self.root;
        while let Some(first) = node.branches.first() {
            depth += 1;
            node = first;
        }
        depth
    }

    /// Total number of scenarios.
    pub fn scenario_count(&self) -> usize {
        fn count(node: &ScenarioContent) -> usize {
            1 + node.branches.iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }
}

fn check_node(
    node: &ScenarioContent,
    location: String,
    depth: usize,
    leaf_depth: &mut Option<usize>,
) -> ScenarioResult<()> {
    if node.prompt.trim().is_empty() {
        return Err(ScenarioError::EmptyField {
            scenario: node.id,
            field: "prompt",
        });
    }

    for choice in Choice::ALL {
        let option = &node.choices[choice.index()];
        if option.label.trim().is_empty() {
            return Err(ScenarioError::EmptyField {
                scenario: node.id,
                field: "choice label",
            });
        }
        if option.positive.trim().is_empty() || option.negative.trim().is_empty() {
            return Err(ScenarioError::EmptyField {
                scenario: node.id,
                field: "outcome text",
            });
        }
        if option.positive == option.negative {
            return Err(ScenarioError::DuplicateOutcome {
                scenario: node.id,
                choice: choice.number(),
            });
        }
    }

    match node.branches.as_slice() {
        [] => match *leaf_depth {
            None => {
                *leaf_depth = Some(depth);
                Ok(())
            }
            Some(expected) if expected == depth => Ok(()),
            Some(expected) => Err(ScenarioError::InvalidTreeShape {
                location,
                reason: format!("leaf at depth {depth}, expected depth {expected}"),
            }),
        },
        [left, right] => {
            check_node(left, format!("{location}.left"), depth + 1, leaf_depth)?;
            check_node(right, format!("{location}.right"), depth + 1, leaf_depth)
        }
        other => Err(ScenarioError::InvalidTreeShape {
            location,
            reason: format!("{} branches, expected 0 or 2", other.len()),
        }),
    }
}
