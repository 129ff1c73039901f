use super::node::SearchNode;
use crate::error::FrontierError;
use crate::filmography::PersonId;
use std::collections::VecDeque;

/// Pending search nodes. Variants differ only in which node `remove` yields.
pub trait Frontier {
    fn add(&mut self, node: SearchNode);

    fn remove(&mut self) -> Result<SearchNode, FrontierError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn contains(&self, state: &PersonId) -> bool;
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<SearchNode, FrontierError> {
        self.nodes.pop().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<SearchNode>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<SearchNode, FrontierError> {
        self.nodes.pop_front().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }
}
