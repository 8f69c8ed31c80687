//! Utility functions for playing games and measuring the board.

use super::interface::{Agent, GameState, Position};
use log::debug;

/// Distance between two cells when moving only along grid lines.
pub fn manhattan_distance(a: Position, b: Position) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Play a game from `state`, asking `agents[i]` for agent `i`'s action in
/// turn order.
///
/// Stops when the game is won or lost, when an agent returns no action, or
/// after `max_moves` individual moves. Returns the final state.
pub fn play_game<S: GameState>(
    mut state: S, agents: &mut [&mut dyn Agent<S>], max_moves: usize,
) -> S {
    assert_eq!(agents.len(), state.num_agents(), "one agent is needed per game agent");
    let mut moves = 0;
    let mut turn = 0;
    while !state.is_terminal() && moves < max_moves {
        match agents[turn].get_action(&state) {
            Some(action) => state = state.generate_successor(turn, action),
            None => break,
        }
        moves += 1;
        turn = (turn + 1) % agents.len();
    }
    debug!(
        "game ended after {} moves (win: {}, lose: {}, score: {})",
        moves,
        state.is_win(),
        state.is_lose(),
        state.score()
    );
    state
}
