use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod kruskal;
pub mod union_find;

use kruskal::randomized_kruskal;
use union_find::{DisjointSet, SlowDisjointSet};

use crate::{
    error::MazeError,
    maze::{Maze, Orientation},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Which union-find implementation tracks connectivity while carving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UnionFindKind {
    /// Path compression on every find.
    #[default]
    Fast,
    /// Plain parent chains, kept for comparison.
    Slow,
}

impl std::fmt::Display for UnionFindKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnionFindKind::Fast => write!(f, "Union-find with path compression"),
            UnionFindKind::Slow => write!(f, "Union-find without path compression"),
        }
    }
}

/// Generates a perfect maze: every cell reachable, exactly one path between any two cells.
///
/// # Panics
/// If either dimension is zero.
pub fn generate_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    kind: UnionFindKind,
    rng: &mut R,
) -> Maze {
    let mut maze = Maze::new(width, height);
    let cells = width * height;
    match kind {
        UnionFindKind::Fast => randomized_kruskal(&mut maze, &mut DisjointSet::new(cells), rng),
        UnionFindKind::Slow => {
            randomized_kruskal(&mut maze, &mut SlowDisjointSet::new(cells), rng)
        }
    }
    maze
}

/// Opens `count` more walls picked at random, which adds cycles but never disconnects anything.
///
/// Each draw first picks the vertical or horizontal pool with equal chance, then a position
/// inside it; positions whose wall is already open are drawn again.
pub fn remove_random_walls<R: Rng + ?Sized>(
    maze: &mut Maze,
    count: usize,
    rng: &mut R,
) -> Result<(), MazeError> {
    let available = maze.closed_walls().count();
    if count > available {
        return Err(MazeError::NotEnoughWalls {
            requested: count,
            available,
        });
    }

    let (width, height) = (maze.width(), maze.height());
    let has_vertical = width > 1;
    let has_horizontal = height > 1;

    let mut found = 0;
    while found < count {
        let orientation = match (has_vertical, has_horizontal) {
            (true, true) if rng.random_bool(0.5) => Orientation::Vertical,
            (true, false) => Orientation::Vertical,
            _ => Orientation::Horizontal,
        };
        let from = match orientation {
            Orientation::Vertical => (rng.random_range(0..width - 1), rng.random_range(0..height)),
            Orientation::Horizontal => {
                (rng.random_range(0..width), rng.random_range(0..height - 1))
            }
        };
        if maze.remove_wall(from, orientation) {
            found += 1;
        }
    }
    tracing::debug!("Removed {} random walls", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::shortest::shortest_path;

    #[test]
    fn test_generate_maze_both_kinds() {
        for kind in [UnionFindKind::Fast, UnionFindKind::Slow] {
            let maze = generate_maze(7, 9, kind, &mut get_rng(Some(5)));
            assert_eq!(maze.open_edge_count(), 7 * 9 - 1);
            assert!(shortest_path(&maze).unwrap().is_perfect);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_maze(15, 15, UnionFindKind::Fast, &mut get_rng(Some(42)));
        let b = generate_maze(15, 15, UnionFindKind::Fast, &mut get_rng(Some(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_random_walls_adds_exactly_count() {
        let mut rng = get_rng(Some(8));
        let mut maze = generate_maze(10, 10, UnionFindKind::Fast, &mut rng);
        let before = maze.open_edge_count();
        remove_random_walls(&mut maze, 12, &mut rng).unwrap();
        assert_eq!(maze.open_edge_count(), before + 12);
        let result = shortest_path(&maze).unwrap();
        assert_eq!(result.reached, 100);
        assert!(!result.is_perfect);
    }

    #[test]
    fn test_remove_random_walls_single_row() {
        let mut rng = get_rng(Some(1));
        let mut maze = Maze::new(5, 1);
        remove_random_walls(&mut maze, 4, &mut rng).unwrap();
        assert_eq!(maze.open_edge_count(), 4);
    }

    #[test]
    fn test_remove_too_many_walls() {
        let mut rng = get_rng(Some(1));
        let mut maze = generate_maze(3, 3, UnionFindKind::Fast, &mut rng);
        // 12 edges, 8 open after carving
        assert!(matches!(
            remove_random_walls(&mut maze, 5, &mut rng),
            Err(MazeError::NotEnoughWalls {
                requested: 5,
                available: 4
            })
        ));
        assert!(remove_random_walls(&mut maze, 4, &mut rng).is_ok());
        assert_eq!(maze.closed_walls().count(), 0);
    }
}
