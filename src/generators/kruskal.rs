use rand::{Rng, seq::SliceRandom};

use super::union_find::UnionFind;
use crate::maze::Maze;

/// Carves a random spanning tree into `maze` with Kruskal's algorithm.
///
/// Every interior edge is visited in a uniformly shuffled order, and the wall is opened
/// whenever its two cells are not connected yet. Stops as soon as a single component is left.
/// `union_find` must hold one element per cell, all disconnected.
pub fn randomized_kruskal<U: UnionFind, R: Rng + ?Sized>(
    maze: &mut Maze,
    union_find: &mut U,
    rng: &mut R,
) {
    let width = maze.width();
    let height = maze.height();
    assert_eq!(
        union_find.len(),
        width * height,
        "Union-find must hold exactly one element per cell"
    );

    // Convert cell coordinates to union-find indices
    let index = |(i, j): (usize, usize)| i * height + j;

    let mut edges = maze.edges().collect::<Vec<_>>();
    edges.shuffle(rng);

    let mut components = width * height;
    for (from, orientation) in edges {
        if components == 1 {
            break;
        }
        let to = orientation.step(from);
        // If cells are not yet connected, remove the wall between them
        if union_find.try_union(index(from), index(to)) {
            components -= 1;
            maze.remove_wall(from, orientation);
            tracing::trace!("Opened {} wall after {:?}", orientation, from);
        }
    }
    tracing::debug!(
        "Kruskal carved a {}x{} maze, {} components left",
        width,
        height,
        components
    );
}
