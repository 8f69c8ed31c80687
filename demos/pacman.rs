//! A small Pacman grid world using the library, for use in tests, benchmarks
//! and as a demo.
//!
//! Pacman (agent 0) scores 10 per pellet and 500 for clearing the board, and
//! pays 1 per move. Touching a ghost loses the game (-500) unless the ghost is
//! scared after Pacman ate a capsule, in which case the ghost is eaten (+200)
//! and sent back to where it started.
#![allow(dead_code)]

extern crate pacsearch;

use pacsearch::{Cost, Evaluation, GhostState, Position, Successor};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result};
use std::rc::Rc;

pub const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%";

pub const SMALL_CLASSIC: &str = "\
%%%%%%%%%%
%P. . . o%
% %% %%% %
%. . G  .%
%%%%%%%%%%";

const TIME_PENALTY: Evaluation = 1.0;
const FOOD_REWARD: Evaluation = 10.0;
const WIN_REWARD: Evaluation = 500.0;
const LOSE_PENALTY: Evaluation = 500.0;
const EAT_GHOST_REWARD: Evaluation = 200.0;
const SCARED_TIME: u32 = 40;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    pub const MOVES: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    fn apply(self, (x, y): Position) -> Position {
        match self {
            Direction::North => (x, y - 1),
            Direction::South => (x, y + 1),
            Direction::East => (x + 1, y),
            Direction::West => (x - 1, y),
            Direction::Stop => (x, y),
        }
    }
}

/// The immutable part of a board.
#[derive(Debug)]
pub struct Walls {
    cells: Vec<Vec<bool>>,
}

impl Walls {
    pub fn is_wall(&self, (x, y): Position) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(true)
    }

    fn open_moves(&self, from: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::MOVES
            .into_iter()
            .map(move |d| (d, d.apply(from)))
            .filter(move |&(_, to)| !self.is_wall(to))
    }
}

#[derive(Clone, Debug)]
pub struct Ghost {
    pub state: GhostState,
    pub start: Position,
}

#[derive(Clone, Debug)]
pub struct PacmanGame {
    walls: Rc<Walls>,
    food: BTreeSet<Position>,
    capsules: BTreeSet<Position>,
    pacman: Position,
    ghosts: Vec<Ghost>,
    score: Evaluation,
    win: bool,
    lose: bool,
}

impl PacmanGame {
    /// Read a board drawn with `%` walls, `.` food, `o` capsules, `P` for
    /// Pacman and `G` for ghosts.
    pub fn parse(layout: &str) -> PacmanGame {
        let mut cells = Vec::new();
        let mut food = BTreeSet::new();
        let mut capsules = BTreeSet::new();
        let mut pacman = None;
        let mut ghosts = Vec::new();
        for (y, line) in layout.lines().enumerate() {
            let mut row = Vec::new();
            for (x, c) in line.chars().enumerate() {
                let pos = (x as i32, y as i32);
                row.push(c == '%');
                match c {
                    '.' => {
                        food.insert(pos);
                    }
                    'o' => {
                        capsules.insert(pos);
                    }
                    'P' => pacman = Some(pos),
                    'G' => ghosts.push(Ghost {
                        state: GhostState { position: pos, scared_timer: 0 },
                        start: pos,
                    }),
                    _ => {}
                }
            }
            cells.push(row);
        }
        PacmanGame {
            walls: Rc::new(Walls { cells }),
            food,
            capsules,
            pacman: pacman.expect("layout has no Pacman"),
            ghosts,
            score: 0.0,
            win: false,
            lose: false,
        }
    }

    pub fn walls(&self) -> &Rc<Walls> {
        &self.walls
    }

    /// Replace the food on the board.
    pub fn with_food(mut self, food: &[Position]) -> Self {
        self.food = food.iter().copied().collect();
        self
    }

    /// Move ghost `i` and set how long it stays scared.
    pub fn with_ghost(mut self, i: usize, position: Position, scared_timer: u32) -> Self {
        self.ghosts[i].state = GhostState { position, scared_timer };
        self
    }

    pub fn with_score(mut self, score: Evaluation) -> Self {
        self.score = score;
        self
    }

    fn resolve_collisions(&mut self) {
        let pacman = self.pacman;
        for ghost in self.ghosts.iter_mut() {
            if ghost.state.position != pacman {
                continue;
            }
            if ghost.state.is_scared() {
                self.score += EAT_GHOST_REWARD;
                ghost.state = GhostState { position: ghost.start, scared_timer: 0 };
            } else if !self.win {
                self.score -= LOSE_PENALTY;
                self.lose = true;
            }
        }
    }
}

impl pacsearch::GameState for PacmanGame {
    type Action = Direction;

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        if self.win || self.lose {
            return Vec::new();
        }
        if agent == 0 {
            let mut moves: Vec<Direction> =
                self.walls.open_moves(self.pacman).map(|(d, _)| d).collect();
            moves.push(Direction::Stop);
            moves
        } else {
            self.walls.open_moves(self.ghosts[agent - 1].state.position).map(|(d, _)| d).collect()
        }
    }

    fn generate_successor(&self, agent: usize, action: Direction) -> Self {
        assert!(!self.win && !self.lose, "cannot move in a finished game");
        let mut next = self.clone();
        if agent == 0 {
            next.score -= TIME_PENALTY;
            next.pacman = action.apply(self.pacman);
            if next.food.remove(&next.pacman) {
                next.score += FOOD_REWARD;
                if next.food.is_empty() {
                    next.score += WIN_REWARD;
                    next.win = true;
                }
            }
            if next.capsules.remove(&next.pacman) {
                for ghost in next.ghosts.iter_mut() {
                    ghost.state.scared_timer = SCARED_TIME;
                }
            }
        } else {
            let ghost = &mut next.ghosts[agent - 1].state;
            ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
            ghost.position = action.apply(ghost.position);
        }
        next.resolve_collisions();
        next
    }

    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn score(&self) -> Evaluation {
        self.score
    }
}

impl pacsearch::PacmanState for PacmanGame {
    fn food(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn pacman_position(&self) -> Position {
        self.pacman
    }

    fn ghost_states(&self) -> Vec<GhostState> {
        self.ghosts.iter().map(|g| g.state).collect()
    }

    fn capsules(&self) -> Vec<Position> {
        self.capsules.iter().copied().collect()
    }
}

impl Display for PacmanGame {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for (y, row) in self.walls.cells.iter().enumerate() {
            for (x, &wall) in row.iter().enumerate() {
                let pos = (x as i32, y as i32);
                let c = if wall {
                    '%'
                } else if pos == self.pacman {
                    'P'
                } else if let Some(g) = self.ghosts.iter().find(|g| g.state.position == pos) {
                    if g.state.is_scared() {
                        'S'
                    } else {
                        'G'
                    }
                } else if self.food.contains(&pos) {
                    '.'
                } else if self.capsules.contains(&pos) {
                    'o'
                } else {
                    ' '
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "score: {}", self.score)
    }
}

/// Find a path for Pacman to a single cell of the board.
pub struct PositionSearchProblem {
    walls: Rc<Walls>,
    start: Position,
    goal: Position,
}

impl PositionSearchProblem {
    pub fn new(game: &PacmanGame, goal: Position) -> Self {
        PositionSearchProblem { walls: game.walls.clone(), start: game.pacman, goal }
    }
}

impl pacsearch::SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        self.walls.open_moves(*state).map(|(d, to)| Successor::new(to, d, 1.0)).collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        let mut pos = self.start;
        for &d in actions {
            pos = d.apply(pos);
            if self.walls.is_wall(pos) {
                return Cost::INFINITY;
            }
        }
        actions.len() as Cost
    }
}

fn main() {
    use pacsearch::{GameState, SearchProblem};

    let maze = PacmanGame::parse(TINY_MAZE);
    let problem = PositionSearchProblem::new(&maze, (1, 5));
    for name in ["dfs", "bfs", "ucs", "astar"] {
        let algorithm: pacsearch::Algorithm = name.parse().unwrap();
        match algorithm.solve(&problem) {
            Some(path) => {
                println!("{}: {:?} (cost {})", name, path, problem.cost_of_actions(&path))
            }
            None => println!("{}: no path", name),
        }
    }

    let game = PacmanGame::parse(SMALL_CLASSIC);
    let opts = pacsearch::AgentOptions::parse("composite", "2").unwrap();
    let mut pacman = pacsearch::AlphaBetaAgent::from_options(opts);
    let mut ghost = pacsearch::RandomAgent::new(1);
    let mut agents: [&mut dyn pacsearch::Agent<PacmanGame>; 2] = [&mut pacman, &mut ghost];
    let end = pacsearch::play_game(game, &mut agents, 500);
    print!("{}", end);
    println!("{}", if end.is_win() { "Pacman wins!" } else { "Pacman loses." });
}
