use super::fixtures::{pid, step};
use degrees_core::FrontierError;
use degrees_core::pathfinding::{Frontier, QueueFrontier, SearchNode, SearchTree, StackFrontier};

fn filled<F: Frontier>(mut frontier: F) -> F {
    let mut tree = SearchTree::new();
    let root = tree.insert(SearchNode::root(pid("a")));
    frontier.add(SearchNode::root(pid("a")));
    frontier.add(SearchNode::child(root, step("m1", "b")));
    frontier.add(SearchNode::child(root, step("m2", "c")));
    frontier
}

fn drain<F: Frontier>(frontier: &mut F) -> Vec<String> {
    let mut states = Vec::new();
    while !frontier.is_empty() {
        states.push(frontier.remove().unwrap().state.to_string());
    }
    states
}

#[test]
fn test_queue_removes_oldest_first() {
    let mut frontier = filled(QueueFrontier::new());

    assert_eq!(drain(&mut frontier), ["a", "b", "c"]);
}

#[test]
fn test_stack_removes_newest_first() {
    let mut frontier = filled(StackFrontier::new());

    assert_eq!(drain(&mut frontier), ["c", "b", "a"]);
}

#[test]
fn test_remove_from_empty_frontier_fails() {
    assert_eq!(QueueFrontier::new().remove(), Err(FrontierError::Empty));
    assert_eq!(StackFrontier::new().remove(), Err(FrontierError::Empty));
}

#[test]
fn test_remove_after_draining_fails() {
    let mut frontier = filled(QueueFrontier::new());
    drain(&mut frontier);

    assert!(frontier.is_empty());
    assert_eq!(frontier.remove(), Err(FrontierError::Empty));
}

#[test]
fn test_contains_checks_pending_states() {
    let mut frontier = filled(QueueFrontier::new());

    assert!(frontier.contains(&pid("b")));
    assert!(!frontier.contains(&pid("z")));

    frontier.remove().unwrap();
    assert!(!frontier.contains(&pid("a")));
    assert_eq!(frontier.len(), 2);
}

#[test]
fn test_stack_contains_and_len() {
    let mut frontier = filled(StackFrontier::new());

    assert_eq!(frontier.len(), 3);
    frontier.remove().unwrap();
    assert!(!frontier.contains(&pid("c")));
    assert!(frontier.contains(&pid("a")));
}

#[test]
fn test_empty_frontier_error_message() {
    assert_eq!(FrontierError::Empty.to_string(), "cannot remove from an empty frontier");
}
