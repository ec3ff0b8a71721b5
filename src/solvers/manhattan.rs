//! Distance-guided routing without global memory.
//!
//! Taken from fault tolerant network-on-chip routing (Fattah et al., "A Low-Overhead,
//! Fully-Distributed, Guaranteed-Delivery Routing Algorithm for Faulty Network-on-Chips",
//! NOCS '15): head for the target while that makes progress, otherwise follow the left hand
//! until a cell closer than any seen before shows up.

use super::wall_follower::{Hand, choose_by_hand};
use crate::{error::MazeError, maze::Coord, traversal::Traversal};

pub fn manhattan_distance(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Orders the step from `from` to the adjacent `to`:
/// row above < column left < row below < column right.
fn step_rank(from: Coord, to: Coord) -> u8 {
    if to.1 + 1 == from.1 {
        0
    } else if to.0 + 1 == from.0 {
        1
    } else if to.1 == from.1 + 1 {
        2
    } else {
        3
    }
}

/// Routes to the target, keeping only the best distance so far, a left hand flag and
/// the previous cell. Returns the visit length.
pub fn manhattan_visit(
    traversal: &mut Traversal<'_>,
    step_limit: Option<usize>,
) -> Result<usize, MazeError> {
    let target = traversal.target();
    let distance = |cell: Coord| manhattan_distance(cell, target);

    let mut best_so_far = distance(traversal.current());
    let mut going_left_hand = false;
    let mut previous = None;
    let mut steps = 0;

    while !traversal.is_finish() {
        if let Some(limit) = step_limit.filter(|&limit| steps >= limit) {
            return Err(MazeError::StepLimitExceeded { limit });
        }
        let current = traversal.current();
        let neighbors = traversal.current_neighbors()?;
        let current_distance = distance(current);

        let productive = (best_so_far == current_distance)
            .then(|| {
                neighbors
                    .iter()
                    .copied()
                    .find(|&n| distance(n) < current_distance)
            })
            .flatten();

        let next = match productive {
            Some(next) => {
                going_left_hand = false;
                best_so_far -= 1;
                Some(next)
            }
            None if going_left_hand => choose_by_hand(Hand::Left, &neighbors, previous),
            None => {
                going_left_hand = true;
                neighbors
                    .iter()
                    .copied()
                    .max_by_key(|&n| step_rank(current, n))
            }
        };
        let next = next.ok_or(MazeError::Isolated { cell: current })?;

        previous = Some(current);
        traversal.move_to(next)?;
        steps += 1;
    }
    tracing::debug!("Manhattan router best distance ended at {}", best_so_far);
    Ok(traversal.visit_length())
}
