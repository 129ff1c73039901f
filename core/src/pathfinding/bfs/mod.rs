mod state;

use super::frontier::{Frontier, QueueFrontier, StackFrontier};
use super::utils::{PathResult, PathStep, SearchOutcome};
use crate::filmography::{GraphIndex, PersonId};
use crate::search_config::{Algorithm, SearchConfig};
use std::time::Instant;
use tracing::debug;

pub use state::SearchState;

/// Fewest-works chain from `source` to `target`, or `None` if they are not connected.
///
/// `source == target` yields an empty path. Ids are not validated: a person
/// missing from the graph just has no neighbors.
pub fn shortest_path<G: GraphIndex + ?Sized>(
    graph: &G,
    source: &PersonId,
    target: &PersonId,
) -> Option<Vec<PathStep>> {
    let mut search_state = SearchState::new(QueueFrontier::new(), source.clone());
    search_state
        .find_path_to_target(target, graph, None)
        .into_path()
}

pub fn find_path<G: GraphIndex + ?Sized>(
    graph: &G,
    source: &PersonId,
    target: &PersonId,
    config: &SearchConfig,
) -> PathResult {
    match config.algorithm {
        Algorithm::Bfs => search_with(QueueFrontier::new(), graph, source, target, config.max_expansions),
        Algorithm::Dfs => search_with(StackFrontier::new(), graph, source, target, config.max_expansions),
    }
}

/// Runs the search loop over any frontier discipline.
pub fn search_with<F: Frontier, G: GraphIndex + ?Sized>(
    frontier: F,
    graph: &G,
    source: &PersonId,
    target: &PersonId,
    max_expansions: Option<usize>,
) -> PathResult {
    let search_timer = Instant::now();
    debug!(%source, %target, ?max_expansions, "starting search");

    let mut search_state = SearchState::new(frontier, source.clone());
    let outcome = search_state.find_path_to_target(target, graph, max_expansions);

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    let explored = search_state.explored_count();
    debug!(
        explored,
        expansions = search_state.expansions(),
        degrees = ?outcome.path().map(<[PathStep]>::len),
        limit_reached = matches!(outcome, SearchOutcome::LimitReached),
        elapsed_time,
        "search finished"
    );

    (outcome, explored, elapsed_time)
}
