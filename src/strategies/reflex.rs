//! A one-ply reflex agent.
//!
//! Scores the state after each of agent 0's legal actions and picks randomly
//! among the best. There is no deeper search.

use super::super::interface::*;
use log::debug;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct ReflexAgent<E, R = ThreadRng> {
    eval: E,
    rng: R,
}

impl<E> ReflexAgent<E> {
    pub fn new(eval: E) -> Self {
        ReflexAgent { eval, rng: rand::thread_rng() }
    }
}

impl<E, R: Rng> ReflexAgent<E, R> {
    pub fn with_rng(eval: E, rng: R) -> Self {
        ReflexAgent { eval, rng }
    }
}

impl<S, E, R> Agent<S> for ReflexAgent<E, R>
where
    S: GameState,
    E: Evaluator<S>,
    R: Rng,
{
    fn get_action(&mut self, s: &S) -> Option<S::Action> {
        if s.is_terminal() {
            return None;
        }
        let graded: Vec<(S::Action, Evaluation)> = s
            .legal_actions(0)
            .into_iter()
            .map(|a| (a, self.eval.evaluate(&s.generate_successor(0, a))))
            .collect();
        let best = graded.iter().map(|&(_, v)| v).fold(WORST_EVAL, Evaluation::max);
        let candidates: Vec<S::Action> =
            graded.iter().filter(|&&(_, v)| v == best).map(|&(a, _)| a).collect();
        let choice = candidates.choose(&mut self.rng).copied();
        debug!("reflex chose {:?} worth {} among {} tied actions", choice, best, candidates.len());
        choice
    }
}
