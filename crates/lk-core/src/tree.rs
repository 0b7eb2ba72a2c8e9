//! The scenario tree: an arena of nodes built once from a content table.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chance::Chance;
use crate::content::{ContentTable, ScenarioContent};
use crate::error::ScenarioResult;
use crate::scenario::Scenario;

/// Index of a node inside a [`ScenarioTree`]. Ids follow level order, so the
/// root is always `0` and its children are `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node.
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the tree. A node has either two children or none.
#[derive(Debug, Clone)]
pub struct TreeNode {
    scenario: Arc<Scenario>,
    parent: Option<NodeId>,
    children: Option<(NodeId, NodeId)>,
    depth: usize,
}

impl TreeNode {
    /// The scenario stored at this node.
    pub fn scenario(&self) -> &Arc<Scenario> {
        &self.scenario
    }

    /// Left and right children, or `None` for a leaf.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        self.children
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Level of this node, starting at 1 for the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Every possible story branch, read-only once built.
#[derive(Debug, Clone)]
pub struct ScenarioTree {
    title: String,
    instructions: String,
    nodes: Vec<TreeNode>,
    depth: usize,
}

/// Build a tree from validated content, drawing one luck delta per scenario
/// in level order.
pub fn build_scenario_tree(
    content: &ContentTable,
    chance: &mut impl Chance,
) -> ScenarioResult<ScenarioTree> {
    content.validate()?;

    let mut nodes: Vec<TreeNode> = Vec::with_capacity(content.scenario_count());
    let mut queue: VecDeque<(&ScenarioContent, Option<NodeId>, usize)> = VecDeque::new();
    queue.push_back((&content.root, None, 1));
    let mut next_id = 1;
    let mut depth = 1;

    while let Some((node, parent, level)) = queue.pop_front() {
        let scenario = Arc::new(Scenario::from_content(node, chance));
        let id = NodeId(nodes.len());
        let children = match node.branches.as_slice() {
            [left, right] => {
                let ids = (NodeId(next_id), NodeId(next_id + 1));
                next_id += 2;
                queue.push_back((left, Some(id), level + 1));
                queue.push_back((right, Some(id), level + 1));
                Some(ids)
            }
            _ => None,
        };
        depth = depth.max(level);
        nodes.push(TreeNode {
            scenario,
            parent,
            children,
            depth: level,
        });
    }

    log::debug!(
        "built scenario tree '{}' with {} nodes, depth {depth}",
        content.title,
        nodes.len()
    );

    Ok(ScenarioTree {
        title: content.title.clone(),
        instructions: content.instructions.clone(),
        nodes,
        depth,
    })
}

impl ScenarioTree {
    /// Game title from the content table.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Instructions text from the content table.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Look up the scenario stored at a node.
    pub fn scenario(&self, id: NodeId) -> Option<&Arc<Scenario>> {
        self.node(id).map(TreeNode::scenario)
    }

    /// Children of a node, `None` for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        self.node(id).and_then(TreeNode::children)
    }

    /// Whether `child` is a direct child of `parent`.
    pub fn is_edge(&self, parent: NodeId, child: NodeId) -> bool {
        self.children(parent)
            .is_some_and(|(left, right)| left == child || right == child)
    }

    /// Number of levels from root to leaf.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. Built trees always have a root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in level order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Leaf node ids, left to right.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, n)| n.is_leaf())
            .map(|(id, _)| id)
            .collect()
    }
}
