pub mod bfs;
pub mod frontier;
pub mod node;
pub mod utils;

pub use bfs::{find_path, search_with, shortest_path};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use node::{NodeId, SearchNode, SearchTree, reconstruct_path};
pub use utils::{PathResult, PathStep, SearchOutcome};
