//! Graph search and multi-agent game-tree search.
//!
//! Graph search (`dfs`, `bfs`, `ucs`, `astar`) solves anything implementing
//! [`SearchProblem`]. The game agents ([`MinimaxAgent`], [`AlphaBetaAgent`],
//! [`ExpectimaxAgent`], [`ReflexAgent`]) play anything implementing
//! [`GameState`], scoring positions with an [`Evaluator`].

pub mod config;
pub mod error;
pub mod evaluators;
pub mod interface;
pub mod search;
pub mod strategies;
pub mod util;

pub use config::AgentOptions;
pub use error::ConfigError;
pub use evaluators::{
    BetterEvaluator, CompositeEvaluator, EvaluatorKind, ScoreEvaluator, GHOST_DISTANCE_CAP,
};
pub use interface::{
    Agent, Cost, Evaluation, Evaluator, GameState, GhostState, PacmanState, Position,
    SearchProblem, Successor, BEST_EVAL, WORST_EVAL,
};
pub use search::{
    a_star_search, astar, bfs, breadth_first_search, depth_first_search, dfs, manhattan_heuristic,
    null_heuristic, ucs, uniform_cost_search, Algorithm,
};
pub use strategies::alphabeta::AlphaBetaAgent;
pub use strategies::expectimax::ExpectimaxAgent;
pub use strategies::minimax::MinimaxAgent;
pub use strategies::random::RandomAgent;
pub use strategies::reflex::ReflexAgent;
pub use util::{manhattan_distance, play_game};
