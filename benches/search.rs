#[macro_use]
extern crate bencher;
extern crate pacsearch;
#[path = "../demos/pacman.rs"]
mod pacman;

use bencher::Bencher;
use pacsearch::*;

fn bench_minimax(b: &mut Bencher) {
    let game = pacman::PacmanGame::parse(pacman::SMALL_CLASSIC);
    b.iter(|| {
        let mut s = MinimaxAgent::new(CompositeEvaluator::default(), 2);
        let m = s.get_action(&game);
        assert!(m.is_some());
    });
}

fn bench_alphabeta(b: &mut Bencher) {
    let game = pacman::PacmanGame::parse(pacman::SMALL_CLASSIC);
    b.iter(|| {
        let mut s = AlphaBetaAgent::new(CompositeEvaluator::default(), 3);
        let m = s.get_action(&game);
        assert!(m.is_some());
    });
}

fn bench_expectimax(b: &mut Bencher) {
    let game = pacman::PacmanGame::parse(pacman::SMALL_CLASSIC);
    b.iter(|| {
        let mut s = ExpectimaxAgent::new(CompositeEvaluator::default(), 2);
        let m = s.get_action(&game);
        assert!(m.is_some());
    });
}

fn bench_bfs(b: &mut Bencher) {
    let maze = pacman::PacmanGame::parse(pacman::TINY_MAZE);
    let problem = pacman::PositionSearchProblem::new(&maze, (1, 5));
    b.iter(|| {
        let path = bfs(&problem);
        assert!(path.is_some());
    });
}

fn bench_astar(b: &mut Bencher) {
    let maze = pacman::PacmanGame::parse(pacman::TINY_MAZE);
    let problem = pacman::PositionSearchProblem::new(&maze, (1, 5));
    b.iter(|| {
        let path = astar(&problem, manhattan_heuristic::<pacman::PositionSearchProblem>((1, 5)));
        assert!(path.is_some());
    });
}

benchmark_group!(benches, bench_minimax, bench_alphabeta, bench_expectimax, bench_bfs, bench_astar);
benchmark_main!(benches);
