use super::super::frontier::Frontier;
use super::super::node::{NodeId, SearchNode, SearchTree, reconstruct_path};
use super::super::utils::{PathStep, SearchOutcome};
use crate::filmography::{GraphIndex, PersonId};
use rustc_hash::FxHashSet;

/// Everything one search call owns: frontier, explored set and node arena.
pub struct SearchState<F: Frontier> {
    frontier: F,
    explored: FxHashSet<PersonId>,
    tree: SearchTree,
    expansions: usize,
}

impl<F: Frontier> SearchState<F> {
    pub fn new(mut frontier: F, source: PersonId) -> Self {
        let mut explored = FxHashSet::default();

        explored.insert(source.clone());
        frontier.add(SearchNode::root(source));

        Self {
            frontier,
            explored,
            tree: SearchTree::new(),
            expansions: 0,
        }
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// People marked so far, the source included.
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    // Marking at enqueue time keeps a person from being queued twice by
    // different parents at the same depth.
    fn visit_neighbor(&mut self, parent: NodeId, link: PathStep) {
        if !self.explored.contains(&link.person_id) {
            self.explored.insert(link.person_id.clone());
            self.frontier.add(SearchNode::child(parent, link));
        }
    }

    pub fn find_path_to_target<G: GraphIndex + ?Sized>(
        &mut self,
        target: &PersonId,
        graph: &G,
        max_expansions: Option<usize>,
    ) -> SearchOutcome {
        while !self.frontier.is_empty() {
            if max_expansions.is_some_and(|limit| self.expansions >= limit) {
                return SearchOutcome::LimitReached;
            }

            let Ok(node) = self.frontier.remove() else {
                break;
            };
            self.expansions += 1;

            let current_person = node.state.clone();
            let node_id = self.tree.insert(node);

            if &current_person == target {
                return SearchOutcome::Found(reconstruct_path(&self.tree, node_id));
            }

            for link in graph.neighbors_of(&current_person) {
                self.visit_neighbor(node_id, link);
            }
        }

        SearchOutcome::NotConnected
    }
}
