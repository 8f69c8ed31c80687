//! Agent implementations.

pub mod alphabeta;
pub mod expectimax;
pub mod minimax;
pub mod random;
pub mod reflex;
mod util;
