//! An agent that randomly chooses a legal action, for modelling ghosts and
//! for use in tests.

use super::super::interface::*;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct RandomAgent<R = ThreadRng> {
    index: usize,
    rng: R,
}

impl RandomAgent {
    /// A random agent playing as agent `index`.
    pub fn new(index: usize) -> Self {
        RandomAgent { index, rng: rand::thread_rng() }
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(index: usize, rng: R) -> Self {
        RandomAgent { index, rng }
    }
}

impl<S: GameState, R: Rng> Agent<S> for RandomAgent<R> {
    fn get_action(&mut self, s: &S) -> Option<S::Action> {
        s.legal_actions(self.index).choose(&mut self.rng).copied()
    }
}
