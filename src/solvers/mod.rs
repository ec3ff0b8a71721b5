use rand::Rng;

pub mod manhattan;
pub mod planar;
pub mod shortest;
pub mod wall_follower;

use crate::{error::MazeError, traversal::Traversal};
use manhattan::manhattan_visit;
use planar::planar_visit;
use wall_follower::{Hand, choose_by_hand, choose_random, no_memory_visit};

/// Step-by-step walking strategies. None of them sees more of the maze than the
/// neighbors of the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Solver {
    /// Random neighbor, never turning back unless at a dead end
    Random,
    #[value(name = "right")]
    RightHand,
    #[value(name = "left")]
    LeftHand,
    /// Pledge-style exploration, only for perfect mazes
    Planar,
    /// Distance-guided routing
    #[value(name = "manh", alias = "manhattan")]
    Manhattan,
}

impl Solver {
    /// Whether two runs on the same maze can produce different walks.
    pub fn is_randomized(self) -> bool {
        matches!(self, Solver::Random | Solver::Planar)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Random => write!(f, "Random walk"),
            Solver::RightHand => write!(f, "Right-hand wall follower"),
            Solver::LeftHand => write!(f, "Left-hand wall follower"),
            Solver::Planar => write!(f, "Planar (Pledge) exploration"),
            Solver::Manhattan => write!(f, "Manhattan-distance router"),
        }
    }
}

/// Runs `solver` on `traversal` until it reaches the target, returning the visit length.
///
/// `step_limit` caps the number of moves; without it a walker that never arrives
/// keeps going.
pub fn solve_maze<R: Rng + ?Sized>(
    traversal: &mut Traversal<'_>,
    solver: Solver,
    rng: &mut R,
    step_limit: Option<usize>,
) -> Result<usize, MazeError> {
    let length = match solver {
        Solver::Random => no_memory_visit(traversal, step_limit, |neighbors, previous| {
            choose_random(neighbors, previous, rng)
        })?,
        Solver::RightHand => no_memory_visit(traversal, step_limit, |neighbors, previous| {
            choose_by_hand(Hand::Right, neighbors, previous)
        })?,
        Solver::LeftHand => no_memory_visit(traversal, step_limit, |neighbors, previous| {
            choose_by_hand(Hand::Left, neighbors, previous)
        })?,
        Solver::Planar => planar_visit(traversal, rng, step_limit)?,
        Solver::Manhattan => manhattan_visit(traversal, step_limit)?,
    };
    tracing::debug!("{} finished with visit length {}", solver, length);
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::{UnionFindKind, generate_maze, get_rng},
        maze::Maze,
        solvers::shortest::shortest_path,
    };

    const SOLVERS: [Solver; 5] = [
        Solver::Random,
        Solver::RightHand,
        Solver::LeftHand,
        Solver::Planar,
        Solver::Manhattan,
    ];

    #[test]
    fn test_every_solver_reaches_target() {
        let maze = generate_maze(10, 8, UnionFindKind::Fast, &mut get_rng(Some(21)));
        let best = shortest_path(&maze).unwrap().path.len() + 1;
        let mut rng = get_rng(Some(21));
        for solver in SOLVERS {
            let mut traversal = Traversal::new(&maze);
            let length = solve_maze(&mut traversal, solver, &mut rng, None).unwrap();
            assert!(traversal.is_finish(), "{}", solver);
            assert!(length >= best, "{}", solver);
        }
    }

    #[test]
    fn test_single_cell_needs_no_step() {
        let maze = Maze::new(1, 1);
        let mut rng = get_rng(Some(0));
        for solver in SOLVERS {
            let mut traversal = Traversal::new(&maze);
            assert_eq!(solve_maze(&mut traversal, solver, &mut rng, None).unwrap(), 1);
        }
    }

    #[test]
    fn test_wall_followers_in_corridor() {
        // A 2x2 U shape: only one way through, whichever hand is on the wall
        let maze: Maze = "2 2\n0 0 H\n".parse().unwrap();
        let mut rng = get_rng(Some(0));
        let mut left = Traversal::new(&maze);
        let mut right = Traversal::new(&maze);
        assert_eq!(
            solve_maze(&mut left, Solver::LeftHand, &mut rng, None).unwrap(),
            3
        );
        assert_eq!(
            solve_maze(&mut right, Solver::RightHand, &mut rng, None).unwrap(),
            3
        );
    }

    #[test]
    fn test_randomized_flags() {
        assert!(Solver::Random.is_randomized());
        assert!(Solver::Planar.is_randomized());
        assert!(!Solver::Manhattan.is_randomized());
        assert!(!Solver::LeftHand.is_randomized());
    }
}
