//! Uniform cost search and A*.
//!
//! Both pop the frontier entry with the least priority, where the priority is
//! the cumulative path cost (plus the heuristic estimate, for A*). A state
//! is pushed again whenever a cheaper path to it turns up before it has been
//! expanded; stale entries are discarded when popped. Once expanded, a state
//! is closed for the rest of the search.
//!
//! Optimality needs non-negative step costs, and for A* a heuristic that never
//! overestimates the remaining cost (and is consistent, because closed states
//! are never reopened).

use super::super::interface::*;
use super::frontier::PriorityFrontier;
use super::null_heuristic;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Search the state of least total cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    best_first(problem, null_heuristic::<P>, "ucs")
}

/// Search the state with the lowest combined cost and heuristic first.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> Cost,
{
    best_first(problem, heuristic, "astar")
}

struct Node<S, A> {
    state: S,
    path: Vec<A>,
    cost: Cost,
}

fn best_first<P, H>(problem: &P, heuristic: H, name: &str) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> Cost,
{
    let start = problem.start_state();
    let mut closed: HashSet<P::State> = HashSet::new();
    // Cheapest known cost to each discovered state.
    let mut best_cost: HashMap<P::State, Cost> = HashMap::new();
    let mut frontier = PriorityFrontier::new();

    best_cost.insert(start.clone(), 0.0);
    let h = heuristic(&start, problem);
    frontier.push(Node { state: start, path: Vec::new(), cost: 0.0 }, h);

    while let Some((node, _)) = frontier.pop() {
        if closed.contains(&node.state) {
            continue;
        }
        if problem.is_goal(&node.state) {
            debug!(
                "{} found a path of cost {} after expanding {} states (frontier peaked at {})",
                name,
                node.cost,
                closed.len(),
                frontier.high_water()
            );
            return Some(node.path);
        }
        trace!("{} expanding {:?} at cost {}", name, node.state, node.cost);
        closed.insert(node.state.clone());
        for Successor { state, action, cost } in problem.successors(&node.state) {
            if closed.contains(&state) {
                continue;
            }
            let g = node.cost + cost;
            match best_cost.get(&state) {
                Some(&known) if known <= g => continue,
                _ => {}
            }
            best_cost.insert(state.clone(), g);
            let mut path = node.path.clone();
            path.push(action);
            let priority = g + heuristic(&state, problem);
            frontier.push(Node { state, path, cost: g }, priority);
        }
    }
    debug!("{} exhausted {} states without reaching a goal", name, closed.len());
    None
}
