use super::super::interface::*;

// The agent to move after `agent`, and the depth remaining when it does.
// Depth only decreases when play wraps back around to agent 0.
pub(super) fn next_turn(agent: usize, num_agents: usize, depth: usize) -> (usize, usize) {
    let next = (agent + 1) % num_agents;
    if next == 0 {
        (next, depth.saturating_sub(1))
    } else {
        (next, depth)
    }
}

// Whether the search stops here and scores the state as it is.
pub(super) fn is_leaf<S: GameState>(s: &S, agent: usize, depth: usize) -> bool {
    s.is_terminal() || (agent == 0 && depth == 0)
}

// Keep the first action with the strictly highest value.
pub(super) fn update_best<A>(best: &mut Option<(A, Evaluation)>, action: A, value: Evaluation) {
    match *best {
        Some((_, b)) if value <= b => {}
        _ => *best = Some((action, value)),
    }
}
