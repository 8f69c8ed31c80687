//! An implementation of Expectimax.
//!
//! Agent 0 maximizes, but the other agents are not assumed to play well:
//! each of their legal actions is taken to be equally likely, and their value
//! is the average over all of them.

use super::super::config::AgentOptions;
use super::super::evaluators::EvaluatorKind;
use super::super::interface::*;
use super::util::*;
use log::debug;

pub struct ExpectimaxAgent<E> {
    depth: usize,
    eval: E,
    nodes_explored: usize,
    prev_value: Evaluation,
}

impl<E> ExpectimaxAgent<E> {
    pub fn new(eval: E, depth: usize) -> ExpectimaxAgent<E> {
        ExpectimaxAgent { depth, eval, nodes_explored: 0, prev_value: 0.0 }
    }

    /// Number of game states visited by the last search, the root included.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// The value of the action chosen by the last search.
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// The expectimax value of `s` with agent 0 to move, searched to this
    /// agent's depth.
    pub fn evaluate_position<S: GameState>(&mut self, s: &S) -> Evaluation
    where
        E: Evaluator<S>,
    {
        self.nodes_explored = 0;
        self.expectimax(s, 0, self.depth)
    }

    fn expectimax<S: GameState>(&mut self, s: &S, agent: usize, depth: usize) -> Evaluation
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
        let n = actions.len();
        let values = actions
            .into_iter()
            .map(|a| self.expectimax(&s.generate_successor(agent, a), next, next_depth));
        if agent == 0 {
            values.fold(WORST_EVAL, Evaluation::max)
        } else {
            values.sum::<Evaluation>() / n as Evaluation
        }
    }
}

impl ExpectimaxAgent<EvaluatorKind> {
    pub fn from_options(opts: AgentOptions) -> Self {
        Self::new(opts.evaluator(), opts.depth())
    }
}

impl<S: GameState, E: Evaluator<S>> Agent<S> for ExpectimaxAgent<E> {
    fn get_action(&mut self, s: &S) -> Option<S::Action> {
        self.nodes_explored = 1;
        if self.depth == 0 || s.is_terminal() {
            return None;
        }
        let (next, next_depth) = next_turn(0, s.num_agents(), self.depth);
        let mut best = None;
        for a in s.legal_actions(0) {
            let value = self.expectimax(&s.generate_successor(0, a), next, next_depth);
            update_best(&mut best, a, value);
        }
        let (action, value) = best?;
        self.prev_value = value;
        debug!(
            "expectimax chose {:?} worth {} after exploring {} nodes",
            action, value, self.nodes_explored
        );
        Some(action)
    }
}
