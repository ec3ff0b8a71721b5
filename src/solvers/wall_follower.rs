//! Walkers that remember nothing but the cell they just left.

use rand::{Rng, seq::IndexedRandom};

use crate::{error::MazeError, maze::Coord, traversal::Traversal};

/// Which hand stays on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Picks the neighbor next to where the walker came from, turning toward `hand`
/// in the fixed neighbor order. With no previous cell, takes the first (left)
/// or last (right) neighbor.
pub fn choose_by_hand(hand: Hand, neighbors: &[Coord], previous: Option<Coord>) -> Option<Coord> {
    let len = neighbors.len();
    if len == 0 {
        return None;
    }
    let entry = previous.and_then(|p| neighbors.iter().position(|&n| n == p));
    let idx = match (hand, entry) {
        (Hand::Left, None) => 0,
        (Hand::Right, None) => len - 1,
        (Hand::Left, Some(idx)) => (idx + 1) % len,
        (Hand::Right, Some(idx)) => (idx + len - 1) % len,
    };
    Some(neighbors[idx])
}

/// Picks a random neighbor other than the one the walker came from, unless it is a dead end.
pub fn choose_random<R: Rng + ?Sized>(
    neighbors: &[Coord],
    previous: Option<Coord>,
    rng: &mut R,
) -> Option<Coord> {
    let entry = previous.and_then(|p| neighbors.iter().position(|&n| n == p));
    match entry {
        Some(idx) if neighbors.len() > 1 => {
            let others = neighbors
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != idx)
                .map(|(_, &n)| n)
                .collect::<Vec<_>>();
            others.choose(rng).copied()
        }
        _ => neighbors.choose(rng).copied(),
    }
}

/// Walks until the target using only the current neighbors and the previous cell.
/// Returns the visit length.
pub fn no_memory_visit(
    traversal: &mut Traversal<'_>,
    step_limit: Option<usize>,
    mut choose: impl FnMut(&[Coord], Option<Coord>) -> Option<Coord>,
) -> Result<usize, MazeError> {
    let mut previous = None;
    let mut steps = 0;
    while !traversal.is_finish() {
        if let Some(limit) = step_limit.filter(|&limit| steps >= limit) {
            return Err(MazeError::StepLimitExceeded { limit });
        }
        let neighbors = traversal.current_neighbors()?;
        let next = choose(&neighbors, previous).ok_or(MazeError::Isolated {
            cell: traversal.current(),
        })?;
        previous = Some(traversal.current());
        traversal.move_to(next)?;
        steps += 1;
    }
    Ok(traversal.visit_length())
}
