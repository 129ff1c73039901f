use super::utils::PathStep;
use crate::filmography::PersonId;

/// Stable handle into a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A person reached during a search, with the link that reached it.
///
/// `link` is `None` only for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<NodeId>,
    pub link: Option<PathStep>,
}

impl SearchNode {
    pub fn root(state: PersonId) -> Self {
        Self {
            state,
            parent: None,
            link: None,
        }
    }

    pub fn child(parent: NodeId, link: PathStep) -> Self {
        Self {
            state: link.person_id.clone(),
            parent: Some(parent),
            link: Some(link),
        }
    }

    pub fn is_root(&self) -> bool {
        self.link.is_none()
    }
}

/// Arena owning every node taken off the frontier during one search.
///
/// Nodes only point backwards to their parent, so handles stay valid for the
/// whole search and no node is ever moved or shared.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Collects incoming links from `goal` back to the root, in source-to-goal order.
///
/// The root contributes no step, so the result length is the number of
/// degrees of separation.
pub fn reconstruct_path(tree: &SearchTree, goal: NodeId) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current = tree.get(goal);

    while let Some(node) = current.filter(|node| !node.is_root()) {
        path.extend(node.link.clone());
        current = node.parent.and_then(|parent| tree.get(parent));
    }

    path.reverse();
    path
}
