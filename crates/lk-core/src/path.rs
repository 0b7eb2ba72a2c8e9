//! Random root-to-leaf descent through the scenario tree.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chance::Chance;
use crate::scenario::Scenario;
use crate::tree::{NodeId, ScenarioTree};

/// Which child a descent step took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// First child.
    Left,
    /// Second child.
    Right,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}

/// One concrete playthrough: the nodes visited from root to leaf.
#[derive(Debug, Clone)]
pub struct Path {
    nodes: Vec<NodeId>,
    branches: Vec<Branch>,
    scenarios: Vec<Arc<Scenario>>,
}

impl Path {
    /// Visited node ids, root first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Branch taken at each non-leaf step; one shorter than the path.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Visited scenarios, root first.
    pub fn scenarios(&self) -> &[Arc<Scenario>] {
        &self.scenarios
    }

    /// Consume the path, keeping only the scenarios.
    pub fn into_scenarios(self) -> Vec<Arc<Scenario>> {
        self.scenarios
    }

    /// Number of scenarios on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path visits nothing.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let steps: Vec<String> = self.scenarios.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", steps.join(" -> "))
    }
}

/// Walk from the root to a leaf, flipping a fair coin at every fork
/// (`true` goes left). The tree is not modified.
pub fn select_path(tree: &ScenarioTree, chance: &mut impl Chance) -> Path {
    let mut path = Path {
        nodes: Vec::with_capacity(tree.depth()),
        branches: Vec::with_capacity(tree.depth().saturating_sub(1)),
        scenarios: Vec::with_capacity(tree.depth()),
    };

    let mut current = tree.root();
    while let Some(node) = tree.node(current) {
        path.nodes.push(current);
        path.scenarios.push(Arc::clone(node.scenario()));

        let Some((left, right)) = node.children() else {
            break;
        };
        if chance.flip() {
            path.branches.push(Branch::Left);
            current = left;
        } else {
            path.branches.push(Branch::Right);
            current = right;
        }
    }

    log::debug!(
        "selected path {}",
        path.branches
            .iter()
            .map(|b| b.to_string())
            .collect::<String>()
    );
    path
}
