//! The common structures and traits.

use std::fmt::Debug;
use std::hash::Hash;

/// An assessment of a game state from the perspective of the maximizing
/// agent (agent 0). Higher values mean a more favorable state.
pub type Evaluation = f64;

/// An absolutely wonderful outcome. Nothing compares greater.
pub const BEST_EVAL: Evaluation = f64::INFINITY;
/// An absolutely disastrous outcome. Nothing compares less.
pub const WORST_EVAL: Evaluation = f64::NEG_INFINITY;

/// Accumulated cost of a path through a search problem.
pub type Cost = f64;

/// A cell on the game grid, as `(x, y)`.
pub type Position = (i32, i32);

/// One edge out of a search state.
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<S, A> {
    /// The state reached.
    pub state: S,
    /// The action that leads there.
    pub action: A,
    /// Incremental cost of taking `action`.
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Successor { state, action, cost }
    }
}

/// A problem that can be solved by searching a graph of states.
///
/// States are compared by equality, which is what decides whether a state has
/// already been visited.
pub trait SearchProblem {
    /// The type of a search state.
    type State: Clone + Eq + Hash + Debug;
    /// The type of an action leading from one state to another.
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Returns true if and only if `state` is a goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Every state reachable from `state` in one step, with the action that
    /// gets there and its step cost.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a sequence of legal actions from the start state.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost;
}

/// A turn-based game with any number of agents.
///
/// Agent 0 is the maximizer. Agents 1 and up move after it, in index order,
/// and then play returns to agent 0. One such round is a ply.
pub trait GameState: Sized {
    /// The type of game actions.
    type Action: Copy + Debug + PartialEq;

    /// Actions available to `agent` in this state. Empty if the agent cannot
    /// move.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after `agent` takes `action`.
    fn generate_successor(&self, agent: usize, action: Self::Action) -> Self;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Number of agents taking turns, including agent 0.
    fn num_agents(&self) -> usize;

    /// The game's built-in score.
    fn score(&self) -> Evaluation;

    /// Whether the game is over.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// A ghost's place on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GhostState {
    pub position: Position,
    /// Moves remaining until the ghost stops being scared. Zero means it is a
    /// threat.
    pub scared_timer: u32,
}

impl GhostState {
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Board accessors for a Pacman style grid game, where agent 0 is Pacman and
/// all other agents are ghosts.
pub trait PacmanState: GameState {
    /// Positions of every remaining food pellet.
    fn food(&self) -> Vec<Position>;

    fn pacman_position(&self) -> Position;

    fn ghost_positions(&self) -> Vec<Position> {
        self.ghost_states().iter().map(|g| g.position).collect()
    }

    fn ghost_states(&self) -> Vec<GhostState>;

    /// Positions of remaining power capsules.
    fn capsules(&self) -> Vec<Position>;
}

/// Evaluates a game's positions.
pub trait Evaluator<S> {
    /// Evaluate `state` from the perspective of agent 0.
    fn evaluate(&self, state: &S) -> Evaluation;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> Evaluation,
{
    fn evaluate(&self, state: &S) -> Evaluation {
        self(state)
    }
}

/// Defines a method of choosing an action for an agent.
pub trait Agent<S: GameState> {
    /// Pick an action for this agent, or `None` if it has nothing to do.
    fn get_action(&mut self, state: &S) -> Option<S::Action>;
}
