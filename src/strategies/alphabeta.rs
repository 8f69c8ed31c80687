//! Minimax with alpha-beta pruning.
//!
//! Alpha is the best value the maximizer can already guarantee on the current
//! path and beta the best the minimizers can. A subtree is abandoned as soon as
//! it is proven to fall outside that window. Pruning uses strict comparisons,
//! so the chosen action and its value always match plain Minimax.

use super::super::config::AgentOptions;
use super::super::evaluators::EvaluatorKind;
use super::super::interface::*;
use super::util::*;
use log::debug;

pub struct AlphaBetaAgent<E> {
    depth: usize,
    eval: E,
    nodes_explored: usize,
    prev_value: Evaluation,
}

impl<E> AlphaBetaAgent<E> {
    pub fn new(eval: E, depth: usize) -> AlphaBetaAgent<E> {
        AlphaBetaAgent { depth, eval, nodes_explored: 0, prev_value: 0.0 }
    }

    /// Number of game states visited by the last search, the root included.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// The value of the action chosen by the last search.
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    fn alphabeta<S: GameState>(
        &mut self, s: &S, agent: usize, depth: usize, mut alpha: Evaluation,
        mut beta: Evaluation,
    ) -> Evaluation
    where
        E: Evaluator<S>,
    {
        self.nodes_explored += 1;
        if is_leaf(s, agent, depth) {
            return self.eval.evaluate(s);
        }
        let actions = s.legal_actions(agent);
        if actions.is_empty() {
            return self.eval.evaluate(s);
        }
        let (next, next_depth) = next_turn(agent, s.num_agents(), depth);
        if agent == 0 {
            let mut best = WORST_EVAL;
            for a in actions {
                let value =
                    self.alphabeta(&s.generate_successor(agent, a), next, next_depth, alpha, beta);
                best = best.max(value);
                if best > beta {
                    break;
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let mut best = BEST_EVAL;
            for a in actions {
                let value =
                    self.alphabeta(&s.generate_successor(agent, a), next, next_depth, alpha, beta);
                best = best.min(value);
                if best < alpha {
                    break;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

impl AlphaBetaAgent<EvaluatorKind> {
    pub fn from_options(opts: AgentOptions) -> Self {
        Self::new(opts.evaluator(), opts.depth())
    }
}

impl<S: GameState, E: Evaluator<S>> Agent<S> for AlphaBetaAgent<E> {
    fn get_action(&mut self, s: &S) -> Option<S::Action> {
        self.nodes_explored = 1;
        if self.depth == 0 || s.is_terminal() {
            return None;
        }
        let (next, next_depth) = next_turn(0, s.num_agents(), self.depth);
        let mut alpha = WORST_EVAL;
        let mut best = None;
        for a in s.legal_actions(0) {
            let value =
                self.alphabeta(&s.generate_successor(0, a), next, next_depth, alpha, BEST_EVAL);
            update_best(&mut best, a, value);
            alpha = alpha.max(value);
        }
        let (action, value) = best?;
        self.prev_value = value;
        debug!(
            "alpha-beta chose {:?} worth {} after exploring {} nodes",
            action, value, self.nodes_explored
        );
        Some(action)
    }
}
