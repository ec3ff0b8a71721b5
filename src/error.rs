use std::io;

use thiserror::Error;

use crate::maze::{Coord, Orientation};

/// Everything that can go wrong while loading, carving or walking a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Line {line}, error: {kind}")]
    Format { line: usize, kind: FormatErrorKind },
    #[error("Empty neighbor list for position {cell:?}")]
    Isolated { cell: Coord },
    #[error("Elements {x} and {y} are already connected")]
    AlreadyConnected { x: usize, y: usize },
    #[error("From {from:?} to {to:?}: {reason}")]
    InvalidMove {
        from: Coord,
        to: Coord,
        reason: MoveError,
    },
    #[error("Target {target:?} is not reachable from the start")]
    Unreachable { target: Coord },
    #[error("Planar visit must start at (0, 0), not {position:?}")]
    NotAtOrigin { position: Coord },
    #[error("Every neighbor of {position:?} is already finished, the maze has a cycle")]
    Exhausted { position: Coord },
    #[error("Gave up after {limit} steps")]
    StepLimitExceeded { limit: usize },
    #[error("Cannot remove {requested} walls, only {available} are left")]
    NotEnoughWalls { requested: usize, available: usize },
    #[error("A {width}x{height} maze is too large to draw")]
    ImageTooLarge { width: usize, height: usize },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Why a line of the persisted maze format was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("missing the `width height` header line")]
    MissingHeader,
    #[error("line should have {expected} tokens, not {found}")]
    TokenCount { expected: usize, found: usize },
    #[error("`{0}` is not an integer")]
    NotAnInteger(String),
    #[error("dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("position {i}, {j} is not valid for a {orientation} wall")]
    OutOfRange {
        i: i64,
        j: i64,
        orientation: Orientation,
    },
    #[error("type `{0}` is not valid, only V and H allowed")]
    UnknownKind(String),
}

/// Reason a traversal move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid move")]
    NotAdjacent,
    #[error("Wall exists")]
    WallExists,
}
