//! Typed configuration errors.
//!
//! Searching itself never fails: a missing path or a position with no moves is
//! reported through `Option`. Only resolving agents and algorithms from their
//! textual names can go wrong.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown evaluation function: {0}")]
    UnknownEvaluator(String),
    #[error("unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("invalid search depth: {0}")]
    InvalidDepth(String),
}
