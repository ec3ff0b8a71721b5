use rand::{Rng, seq::IndexedRandom};

use crate::{
    error::MazeError,
    maze::{Coord, grid::Grid},
    traversal::Traversal,
};

/// Explores a cycle-free maze from `(0, 0)`, never re-entering a cell known to be finished.
///
/// A cell becomes finished when the walker leaves it through its only passage, or leaves it
/// with every neighbor visited. Touching the outer border also finishes the border run
/// between the origin side and the touched cell, since in a planar tree everything enclosed
/// there has already been seen.
///
/// Only valid on perfect mazes, starting at the origin.
pub fn planar_visit<R: Rng + ?Sized>(
    traversal: &mut Traversal<'_>,
    rng: &mut R,
    step_limit: Option<usize>,
) -> Result<usize, MazeError> {
    let origin = traversal.maze().start();
    if traversal.current() != origin {
        return Err(MazeError::NotAtOrigin {
            position: traversal.current(),
        });
    }
    let maze = traversal.maze();
    let mut finished = Grid::new(maze.width(), maze.height(), false);
    let mut previous: Option<Coord> = None;
    let mut steps = 0;

    while !traversal.is_finish() {
        if let Some(limit) = step_limit.filter(|&limit| steps >= limit) {
            return Err(MazeError::StepLimitExceeded { limit });
        }
        let current = traversal.current();
        let neighbors = traversal.current_neighbors()?;
        let next = if previous.is_none() {
            neighbors.first().copied()
        } else if neighbors.len() == 1 {
            finished[current] = true;
            neighbors.first().copied()
        } else {
            let unvisited = neighbors
                .iter()
                .copied()
                .filter(|&n| !traversal.is_visited(n))
                .collect::<Vec<_>>();
            if unvisited.is_empty() {
                finished[current] = true;
                neighbors.iter().copied().find(|&n| !finished[n])
            } else {
                unvisited.choose(rng).copied()
            }
        };
        let next = next.ok_or(MazeError::Exhausted { position: current })?;

        previous = Some(current);
        traversal.move_to(next)?;
        steps += 1;
        if maze.is_border(next) {
            close_border(traversal, &mut finished, next);
        }
    }
    Ok(traversal.visit_length())
}

/// Marks as visited and finished every unvisited run of cells between the origin side of the
/// border and `reached`, scanning inward from the border line `reached` lies on.
fn close_border(traversal: &mut Traversal<'_>, finished: &mut Grid<bool>, reached: Coord) {
    let maze = traversal.maze();
    let (width, height) = (maze.width(), maze.height());
    let (i, j) = reached;

    // Each entry: the first cell of a run and the inward step along it
    let runs: Vec<(Coord, (isize, isize))> = if i == 0 {
        (0..j).map(|row| ((0, row), (1, 0))).collect()
    } else if i == width - 1 {
        (0..j).map(|row| ((width - 1, row), (-1, 0))).collect()
    } else if j == 0 {
        (0..i).map(|col| ((col, 0), (0, 1))).collect()
    } else {
        (0..i).map(|col| ((col, height - 1), (0, -1))).collect()
    };

    for (start, (di, dj)) in runs {
        let mut cell = Some(start);
        while let Some(coord) = cell {
            if !traversal.mark_visited(coord) {
                break;
            }
            finished[coord] = true;
            cell = coord
                .0
                .checked_add_signed(di)
                .zip(coord.1.checked_add_signed(dj))
                .filter(|&next| maze.is_in_bounds(next));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::{UnionFindKind, generate_maze, get_rng},
        maze::Maze,
        solvers::shortest::shortest_path,
    };

    #[test]
    fn test_planar_reaches_target_on_perfect_mazes() {
        for seed in 0..10 {
            let maze = generate_maze(15, 10, UnionFindKind::Fast, &mut get_rng(Some(seed)));
            let best = shortest_path(&maze).unwrap().path.len();
            let mut traversal = Traversal::new(&maze);
            let length = planar_visit(&mut traversal, &mut get_rng(Some(seed)), None).unwrap();
            assert!(traversal.is_finish());
            assert!(length > best);
        }
    }

    #[test]
    fn test_straight_corridor() {
        let maze: Maze = "4 1\n".parse().unwrap();
        let mut traversal = Traversal::new(&maze);
        assert_eq!(
            planar_visit(&mut traversal, &mut get_rng(Some(0)), None).unwrap(),
            4
        );
    }

    #[test]
    fn test_must_start_at_origin() {
        let maze: Maze = "3 1\n".parse().unwrap();
        let mut traversal = Traversal::new(&maze);
        traversal.move_to((1, 0)).unwrap();
        assert!(matches!(
            planar_visit(&mut traversal, &mut get_rng(Some(0)), None),
            Err(MazeError::NotAtOrigin { position: (1, 0) })
        ));
    }

    #[test]
    fn test_close_border_marks_runs() {
        let maze = Maze::open(3, 3);
        let mut traversal = Traversal::new(&maze);
        let mut finished = Grid::new(3, 3, false);
        // Touching the left border at row 2 closes rows 0 and 1 from the left
        close_border(&mut traversal, &mut finished, (0, 2));
        // Row 0 starts at the visited origin, so nothing is marked there
        assert!(!traversal.is_visited((1, 0)));
        assert!(traversal.is_visited((0, 1)));
        assert!(traversal.is_visited((2, 1)));
        assert!(finished[(1, 1)]);
        assert!(!finished[(0, 0)]);
    }

    #[test]
    fn test_close_border_from_right_column() {
        let maze = Maze::open(3, 3);
        let mut traversal = Traversal::new(&maze);
        let mut finished = Grid::new(3, 3, false);
        close_border(&mut traversal, &mut finished, (2, 2));
        // Row 0 scans leftward until the visited origin
        assert!(traversal.is_visited((2, 0)) && finished[(2, 0)]);
        assert!(traversal.is_visited((1, 0)) && finished[(1, 0)]);
        assert!(!finished[(0, 0)]);
        // Row 1 runs off the left edge
        for i in 0..3 {
            assert!(finished[(i, 1)], "{}", i);
        }
        // The reached row itself stays open
        assert!(!traversal.is_visited((0, 2)));
        assert!(!traversal.is_visited((1, 2)));
    }

    #[test]
    fn test_close_border_from_bottom_row() {
        let maze = Maze::open(3, 3);
        let mut traversal = Traversal::new(&maze);
        let mut finished = Grid::new(3, 3, false);
        close_border(&mut traversal, &mut finished, (1, 2));
        // Column 0 scans upward until the visited origin
        assert!(traversal.is_visited((0, 2)) && finished[(0, 2)]);
        assert!(traversal.is_visited((0, 1)) && finished[(0, 1)]);
        assert!(!finished[(0, 0)]);
        assert!(!traversal.is_visited((1, 2)));
        assert!(!traversal.is_visited((2, 1)));
    }

    #[test]
    fn test_close_border_from_top_row() {
        let maze = Maze::open(4, 3);
        let mut traversal = Traversal::new(&maze);
        let mut finished = Grid::new(4, 3, false);
        close_border(&mut traversal, &mut finished, (2, 0));
        // Column 0 starts at the origin; column 1 runs down off the bottom edge
        assert!(!traversal.is_visited((0, 1)));
        for j in 0..3 {
            assert!(finished[(1, j)], "{}", j);
        }
        assert!(!traversal.is_visited((2, 1)));
    }
}
