//! Options for the depth-limited search agents.

use super::error::ConfigError;
use super::evaluators::EvaluatorKind;

/// Options to use for the multi-agent search engines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentOptions {
    depth: usize,
    evaluator: EvaluatorKind,
}

impl AgentOptions {
    pub fn new() -> Self {
        AgentOptions { depth: 2, evaluator: EvaluatorKind::Score }
    }

    /// Build options from the textual forms accepted on the command line,
    /// e.g. `("better", "3")`.
    pub fn parse(evaluator: &str, depth: &str) -> Result<Self, ConfigError> {
        let evaluator = evaluator.parse()?;
        let depth = depth
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidDepth(depth.to_string()))?;
        Ok(AgentOptions { depth, evaluator })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluator(&self) -> EvaluatorKind {
        self.evaluator
    }
}

impl AgentOptions {
    /// How many plies to look ahead. Each ply is one move by every agent.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Which function scores leaf positions.
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self::new()
    }
}
