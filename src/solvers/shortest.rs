use std::collections::VecDeque;

use crate::{
    error::MazeError,
    maze::{Coord, Maze, grid::Grid},
    traversal::Traversal,
};

/// Result of a breadth-first search from the start to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Cells from the start (excluded) to the target (included).
    pub path: Vec<Coord>,
    /// `false` if the search met a cycle.
    pub is_perfect: bool,
    /// Number of cells reachable from the start.
    pub reached: usize,
}

/// Breadth-first search from `(0, 0)` to the far corner.
///
/// While labeling, every already labeled neighbor of the dequeued cell must be its parent,
/// one step closer to the start. Anything else means the maze has a cycle, which is reported
/// through [`ShortestPath::is_perfect`].
pub fn shortest_path(maze: &Maze) -> Result<ShortestPath, MazeError> {
    let start = maze.start();
    let target = maze.target();

    // Distance from the start and the cell it was reached from
    let mut labels: Grid<Option<(usize, Option<Coord>)>> =
        Grid::new(maze.width(), maze.height(), None);
    labels[start] = Some((0, None));
    let mut frontier = VecDeque::from([start]);
    let mut last_distance = 0;
    let mut is_perfect = true;
    let mut reached = 1;

    while let Some(current) = frontier.pop_front() {
        let Some((distance, _)) = labels[current] else {
            unreachable!("queued cells are always labeled");
        };
        debug_assert!(distance == last_distance || distance == last_distance + 1);
        last_distance = distance;

        for neighbor in maze.neighbors(current)? {
            match labels[neighbor] {
                None => {
                    labels[neighbor] = Some((distance + 1, Some(current)));
                    reached += 1;
                    frontier.push_back(neighbor);
                }
                Some((other, _)) if other + 1 != distance => is_perfect = false,
                Some(_) => {}
            }
        }
    }

    if labels[target].is_none() {
        return Err(MazeError::Unreachable { target });
    }
    let mut path = Vec::new();
    let mut current = target;
    while let Some((_, Some(parent))) = labels[current] {
        path.push(current);
        current = parent;
    }
    path.reverse();

    if !is_perfect {
        tracing::warn!("Imperfect maze: it contains at least one cycle");
    }
    tracing::debug!(
        "Shortest path has {} steps, {} cells reached",
        path.len(),
        reached
    );
    Ok(ShortestPath {
        path,
        is_perfect,
        reached,
    })
}

/// Walks `path` through `traversal`, one validated move at a time.
/// Returns the final visit length.
pub fn follow_path(traversal: &mut Traversal<'_>, path: &[Coord]) -> Result<usize, MazeError> {
    for &next in path {
        traversal.move_to(next)?;
    }
    Ok(traversal.visit_length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{UnionFindKind, generate_maze, get_rng};

    #[test]
    fn test_single_cell() {
        let maze = Maze::new(1, 1);
        let result = shortest_path(&maze).unwrap();
        assert!(result.path.is_empty());
        assert!(result.is_perfect);
        assert_eq!(result.reached, 1);
    }

    #[test]
    fn test_known_path() {
        // 2x2 with only (0,0)-(0,1) closed: a U shape
        let maze: Maze = "2 2\n0 0 H\n".parse().unwrap();
        let result = shortest_path(&maze).unwrap();
        assert_eq!(result.path, vec![(1, 0), (1, 1)]);
        assert!(result.is_perfect);
        assert_eq!(result.reached, 4);
    }

    #[test]
    fn test_cycle_is_reported() {
        let maze = Maze::open(2, 2);
        let result = shortest_path(&maze).unwrap();
        assert!(!result.is_perfect);
        assert_eq!(result.path.len(), 2);
    }

    #[test]
    fn test_unreachable_target() {
        // The top row is cut off from the rest, but every cell keeps an open edge
        let maze: Maze = "2 3\n0 1 V\n0 0 H\n1 0 H\n".parse().unwrap();
        assert!(matches!(
            shortest_path(&maze),
            Err(MazeError::Unreachable { target: (1, 2) })
        ));
    }

    #[test]
    fn test_path_is_connected_and_follows() {
        let maze = generate_maze(20, 13, UnionFindKind::Fast, &mut get_rng(Some(77)));
        let result = shortest_path(&maze).unwrap();
        assert!(result.is_perfect);
        assert_eq!(result.reached, 20 * 13);
        assert_eq!(result.path.last(), Some(&maze.target()));
        let mut traversal = Traversal::new(&maze);
        let length = follow_path(&mut traversal, &result.path).unwrap();
        assert!(traversal.is_finish());
        assert_eq!(length, result.path.len() + 1);
    }
}
