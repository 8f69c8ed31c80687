// Evaluators and agents on the demo Pacman board.

extern crate pacsearch;
extern crate rand;
#[path = "../demos/pacman.rs"]
mod pacman;

use pacman::{Direction, PacmanGame, SMALL_CLASSIC};
use pacsearch::evaluators::{nearest_food_distance, nearest_ghost_distance};
use pacsearch::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const OPEN_FIELD: &str = "\
%%%%%%%%
%P . . %
%. . . %
%  .  .%
%%%%%%%%";

const CORRIDOR: &str = "\
%%%%%%%%%%%%
%P   .     %
%%%%%%%%%%G%
%%%%%%%%%%%%";

#[test]
fn food_term_is_zero_without_food() {
    let game = PacmanGame::parse(OPEN_FIELD).with_food(&[]).with_score(7.0);
    assert_eq!(nearest_food_distance(&game), 0);
    // No ghosts either, so only the weighted score is left.
    assert_eq!(CompositeEvaluator::default().evaluate(&game), 14.0);
}

#[test]
fn food_term_measures_nearest_pellet() {
    let game = PacmanGame::parse(OPEN_FIELD).with_food(&[(6, 3), (4, 1)]);
    assert_eq!(nearest_food_distance(&game), 3);
}

#[test]
fn ghost_term_caps_at_four() {
    // Pacman is at (1, 1) and the ghost starts at (10, 2), ten steps away.
    let game = PacmanGame::parse(CORRIDOR);
    assert_eq!(nearest_ghost_distance(&game, GHOST_DISTANCE_CAP), 4);

    let near = game.clone().with_ghost(0, (3, 1), 0);
    assert_eq!(nearest_ghost_distance(&near, GHOST_DISTANCE_CAP), 2);
}

#[test]
fn scared_ghosts_still_count_as_ghosts() {
    let game = PacmanGame::parse(CORRIDOR).with_ghost(0, (3, 1), 10);
    assert_eq!(nearest_ghost_distance(&game, GHOST_DISTANCE_CAP), 2);
    // 2 * 0 + ghost 2 away - food 4 away.
    assert_eq!(CompositeEvaluator::default().evaluate(&game), -2.0);

    let ignoring = CompositeEvaluator { ignore_scared: true, ..CompositeEvaluator::default() };
    assert_eq!(ignoring.evaluate(&game), -4.0);
    // A ghost that is no longer scared counts again.
    let game = game.with_ghost(0, (3, 1), 0);
    assert_eq!(ignoring.evaluate(&game), -2.0);
}

#[test]
fn composite_combines_all_terms() {
    let game = PacmanGame::parse(CORRIDOR).with_score(5.0).with_ghost(0, (4, 1), 0);
    // 2 * 5 + ghost 3 away - food 4 away.
    assert_eq!(CompositeEvaluator::default().evaluate(&game), 9.0);
    assert_eq!(EvaluatorKind::Composite.evaluate(&game), 9.0);
    assert_eq!(EvaluatorKind::Score.evaluate(&game), 5.0);
}

#[test]
fn better_evaluator_looks_ahead_on_score() {
    // A lone Pacman with nothing to eat just pays for two more moves.
    let game = PacmanGame::parse(OPEN_FIELD).with_food(&[]).with_score(10.0);
    assert_eq!(BetterEvaluator::default().evaluate(&game), 8.0 + 10.0);
    assert_eq!(EvaluatorKind::Better.evaluate(&game), 18.0);
}

#[test]
fn reflex_agent_eats_adjacent_food() {
    let game = PacmanGame::parse(OPEN_FIELD).with_food(&[(1, 2), (6, 3)]);
    let mut agent = ReflexAgent::with_rng(CompositeEvaluator::default(), StdRng::seed_from_u64(0));
    assert_eq!(agent.get_action(&game), Some(Direction::South));
}

#[test]
fn reflex_agent_breaks_ties_randomly() {
    // Food on both sides of Pacman, equally far.
    let game = PacmanGame::parse(OPEN_FIELD).with_food(&[(1, 1), (3, 1)]);
    let game = game.generate_successor(0, Direction::East);
    let mut agent = ReflexAgent::with_rng(CompositeEvaluator::default(), StdRng::seed_from_u64(9));
    let chosen: HashSet<Direction> = (0..64).filter_map(|_| agent.get_action(&game)).collect();
    let expected: HashSet<Direction> = [Direction::East, Direction::West].iter().copied().collect();
    assert_eq!(chosen, expected);
}

#[test]
fn agents_from_options_agree() {
    let game = PacmanGame::parse(SMALL_CLASSIC);
    let opts = AgentOptions::parse("composite", "2").unwrap();
    let mut minimax = MinimaxAgent::from_options(opts);
    let mut alphabeta = AlphaBetaAgent::from_options(opts);
    let mut expectimax = ExpectimaxAgent::from_options(opts);

    let action = minimax.get_action(&game);
    assert!(action.is_some());
    assert_eq!(alphabeta.get_action(&game), action);
    assert_eq!(alphabeta.root_value(), minimax.root_value());
    assert!(alphabeta.nodes_explored() <= minimax.nodes_explored());
    assert!(expectimax.get_action(&game).is_some());
    assert!(expectimax.root_value() >= minimax.root_value());
}

#[test]
fn lone_pacman_clears_open_field() {
    let game = PacmanGame::parse(OPEN_FIELD);
    let mut pacman = AlphaBetaAgent::new(CompositeEvaluator::default(), 2);
    let mut agents: [&mut dyn Agent<PacmanGame>; 1] = [&mut pacman];
    let end = play_game(game, &mut agents, 100);
    assert!(end.is_win());
    assert!(end.food().is_empty());
}

#[test]
fn game_against_random_ghost_runs_to_completion() {
    let game = PacmanGame::parse(SMALL_CLASSIC);
    let food = game.food().len();
    let mut pacman = ExpectimaxAgent::new(CompositeEvaluator::default(), 2);
    let mut ghost = RandomAgent::with_rng(1, StdRng::seed_from_u64(4));
    let mut agents: [&mut dyn Agent<PacmanGame>; 2] = [&mut pacman, &mut ghost];
    let end = play_game(game, &mut agents, 400);
    assert!(end.food().len() <= food);
    if end.is_terminal() {
        assert_eq!(end.legal_actions(0), vec![]);
        assert_eq!(end.legal_actions(1), vec![]);
    }
}
