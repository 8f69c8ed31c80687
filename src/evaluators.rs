//! Static position evaluators.
//!
//! All distances are Manhattan distances on the grid.

use super::error::ConfigError;
use super::interface::*;
use super::strategies::expectimax::ExpectimaxAgent;
use super::util::manhattan_distance;
use std::str::FromStr;

/// Ghosts further away than this are no more reassuring than ghosts at this
/// distance.
pub const GHOST_DISTANCE_CAP: i32 = 4;

/// Returns the game's built-in score.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> Evaluation {
        state.score()
    }
}

/// Distance from Pacman to the closest food pellet, or 0 if none are left.
pub fn nearest_food_distance<S: PacmanState>(state: &S) -> i32 {
    let pacman = state.pacman_position();
    state.food().into_iter().map(|f| manhattan_distance(pacman, f)).min().unwrap_or(0)
}

/// Distance from Pacman to the closest ghost, scared or not, capped at `cap`.
/// Zero if there are no ghosts.
pub fn nearest_ghost_distance<S: PacmanState>(state: &S, cap: i32) -> i32 {
    capped_ghost_distance(state, cap, |_| true)
}

fn capped_ghost_distance<S, F>(state: &S, cap: i32, counts: F) -> i32
where
    S: PacmanState,
    F: Fn(&GhostState) -> bool,
{
    let pacman = state.pacman_position();
    state
        .ghost_states()
        .into_iter()
        .filter(|g| counts(g))
        .map(|g| manhattan_distance(pacman, g.position))
        .min()
        .map_or(0, |d| d.min(cap))
}

/// Weighs the score against how far away food is and how close ghosts are.
///
/// `score_weight * score + min(ghost distance, ghost_cap) - food distance`.
/// Scared ghosts count like any other unless `ignore_scared` is set.
#[derive(Copy, Clone, Debug)]
pub struct CompositeEvaluator {
    pub score_weight: f64,
    pub ghost_cap: i32,
    pub ignore_scared: bool,
}

impl Default for CompositeEvaluator {
    fn default() -> Self {
        CompositeEvaluator {
            score_weight: 2.0,
            ghost_cap: GHOST_DISTANCE_CAP,
            ignore_scared: false,
        }
    }
}

impl<S: PacmanState> Evaluator<S> for CompositeEvaluator {
    fn evaluate(&self, state: &S) -> Evaluation {
        let ignore_scared = self.ignore_scared;
        let ghost =
            capped_ghost_distance(state, self.ghost_cap, |g| !(ignore_scared && g.is_scared()));
        let food = nearest_food_distance(state);
        self.score_weight * state.score() + Evaluation::from(ghost) - Evaluation::from(food)
    }
}

/// Looks a few plies ahead with an expectimax search over the raw score, then
/// adds the current score and subtracts the distance to the nearest food.
#[derive(Copy, Clone, Debug)]
pub struct BetterEvaluator {
    pub depth: usize,
}

impl Default for BetterEvaluator {
    fn default() -> Self {
        BetterEvaluator { depth: 2 }
    }
}

impl<S: PacmanState> Evaluator<S> for BetterEvaluator {
    fn evaluate(&self, state: &S) -> Evaluation {
        let lookahead = ExpectimaxAgent::new(ScoreEvaluator, self.depth).evaluate_position(state);
        lookahead - Evaluation::from(nearest_food_distance(state)) + state.score()
    }
}

/// Evaluation functions selectable by name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EvaluatorKind {
    /// [`ScoreEvaluator`].
    Score,
    /// [`CompositeEvaluator`] with its default weights.
    Composite,
    /// [`BetterEvaluator`] with its default depth.
    Better,
}

impl<S: PacmanState> Evaluator<S> for EvaluatorKind {
    fn evaluate(&self, state: &S) -> Evaluation {
        match *self {
            EvaluatorKind::Score => ScoreEvaluator.evaluate(state),
            EvaluatorKind::Composite => CompositeEvaluator::default().evaluate(state),
            EvaluatorKind::Better => BetterEvaluator::default().evaluate(state),
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" | "scoreevaluationfunction" => Ok(EvaluatorKind::Score),
            "composite" | "reflex" => Ok(EvaluatorKind::Composite),
            "better" | "betterevaluationfunction" => Ok(EvaluatorKind::Better),
            _ => Err(ConfigError::UnknownEvaluator(s.to_string())),
        }
    }
}
