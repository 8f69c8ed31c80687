//! Breadth-first graph search.
//!
//! States are marked as soon as they are discovered, so each one enters the
//! queue once and keeps the first (shallowest) path that reached it.

use super::super::interface::*;
use log::{debug, trace};
use std::collections::{HashMap, VecDeque};

pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    let start = problem.start_state();
    // Maps each discovered state to the state and action it was reached by.
    let mut parents: HashMap<P::State, Option<(P::State, P::Action)>> = HashMap::new();
    let mut queue = VecDeque::new();
    parents.insert(start.clone(), None);
    queue.push_back(start);

    let mut expanded = 0usize;
    while let Some(state) = queue.pop_front() {
        if problem.is_goal(&state) {
            let path = trace_path(&parents, state);
            debug!("bfs found a {}-step path after expanding {} states", path.len(), expanded);
            return Some(path);
        }
        trace!("bfs expanding {:?}", state);
        expanded += 1;
        for Successor { state: next, action, .. } in problem.successors(&state) {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next.clone(), Some((state.clone(), action)));
            queue.push_back(next);
        }
    }
    debug!("bfs exhausted {} states without reaching a goal", expanded);
    None
}

// Walk parent links back from `goal` to the start state.
fn trace_path<S, A>(parents: &HashMap<S, Option<(S, A)>>, goal: S) -> Vec<A>
where
    S: Eq + std::hash::Hash,
    A: Clone,
{
    let mut path = Vec::new();
    let mut current = &goal;
    while let Some(Some((parent, action))) = parents.get(current) {
        path.push(action.clone());
        current = parent;
    }
    path.reverse();
    path
}
