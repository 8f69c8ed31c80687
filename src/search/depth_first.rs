//! Depth-first graph search.
//!
//! Descends into the first unvisited successor until a goal turns up, backing
//! out of states whose successors are exhausted. The result is the first path
//! found, which is not necessarily the shortest or the cheapest.

use super::super::interface::*;
use log::{debug, trace};
use std::collections::HashSet;
use std::vec::IntoIter;

pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    let start = problem.start_state();
    if problem.is_goal(&start) {
        return Some(Vec::new());
    }
    let mut visited = HashSet::new();
    // One frame per state on the current path, holding the successors not
    // tried yet. `path[i]` is the action taken out of `stack[i]`.
    let mut stack: Vec<IntoIter<Successor<P::State, P::Action>>> = Vec::new();
    let mut path = Vec::new();

    trace!("dfs expanding {:?}", start);
    stack.push(problem.successors(&start).into_iter());
    visited.insert(start);

    while let Some(frame) = stack.last_mut() {
        match frame.next() {
            Some(Successor { state, action, .. }) => {
                if !visited.insert(state.clone()) {
                    continue;
                }
                path.push(action);
                if problem.is_goal(&state) {
                    debug!(
                        "dfs found a {}-step path after visiting {} states",
                        path.len(),
                        visited.len()
                    );
                    return Some(path);
                }
                trace!("dfs expanding {:?}", state);
                stack.push(problem.successors(&state).into_iter());
            }
            None => {
                stack.pop();
                path.pop();
            }
        }
    }
    debug!("dfs exhausted {} states without reaching a goal", visited.len());
    None
}
