//! Graph search over a [`SearchProblem`].
//!
//! Every algorithm returns the actions leading from the start state to a goal
//! state, or `None` when no goal is reachable. No state is expanded twice in a
//! single run.

mod best_first;
mod breadth_first;
mod depth_first;
pub mod frontier;

use super::error::ConfigError;
use super::interface::*;
use super::util::manhattan_distance;
use std::str::FromStr;

pub use self::best_first::{a_star_search, uniform_cost_search};
pub use self::breadth_first::breadth_first_search;
pub use self::depth_first::depth_first_search;

pub use self::best_first::a_star_search as astar;
pub use self::best_first::uniform_cost_search as ucs;
pub use self::breadth_first::breadth_first_search as bfs;
pub use self::depth_first::depth_first_search as dfs;

/// A heuristic that always estimates zero remaining cost. A* with this
/// heuristic behaves exactly like uniform cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> Cost {
    0.0
}

/// A heuristic for problems whose states are grid cells: the Manhattan
/// distance to `goal`. Admissible whenever every step costs at least 1.
pub fn manhattan_heuristic<P>(goal: Position) -> impl Fn(&Position, &P) -> Cost
where
    P: SearchProblem<State = Position>,
{
    move |state: &Position, _: &P| Cost::from(manhattan_distance(*state, goal))
}

/// Graph search algorithms selectable by name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    /// A* with [`null_heuristic`]. Call [`a_star_search`] directly to supply
    /// a real heuristic.
    AStar,
}

impl Algorithm {
    pub fn solve<P: SearchProblem>(self, problem: &P) -> Option<Vec<P::Action>> {
        match self {
            Algorithm::DepthFirst => depth_first_search(problem),
            Algorithm::BreadthFirst => breadth_first_search(problem),
            Algorithm::UniformCost => uniform_cost_search(problem),
            Algorithm::AStar => a_star_search(problem, null_heuristic::<P>),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depthfirstsearch" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadthfirstsearch" => Ok(Algorithm::BreadthFirst),
            "ucs" | "uniformcostsearch" => Ok(Algorithm::UniformCost),
            "astar" | "astarsearch" => Ok(Algorithm::AStar),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::BreadthFirst);
        assert_eq!("depthFirstSearch".parse::<Algorithm>().unwrap(), Algorithm::DepthFirst);
        assert_eq!("UCS".parse::<Algorithm>().unwrap(), Algorithm::UniformCost);
        assert_eq!("aStarSearch".parse::<Algorithm>().unwrap(), Algorithm::AStar);
    }

    #[test]
    fn rejects_unknown_names() {
        match "greedy".parse::<Algorithm>() {
            Err(ConfigError::UnknownAlgorithm(name)) => assert_eq!(name, "greedy"),
            other => panic!("unexpected parse result: {:?}", other),
        }
    }
}
