pub mod cell;
pub mod format;
pub mod grid;
pub mod text;

use std::fmt;

use crate::error::MazeError;
use grid::Grid;

/// Cell coordinate `(i, j)`: column `i`, row `j`.
pub type Coord = (usize, usize);

/// Which kind of wall sits after a cell.
///
/// - `Vertical`: between `(i, j)` and `(i + 1, j)`
/// - `Horizontal`: between `(i, j)` and `(i, j + 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Token used by the persisted format.
    pub fn token(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }

    /// The cell on the other side of the wall after `from`.
    pub fn step(self, from: Coord) -> Coord {
        match self {
            Orientation::Horizontal => (from.0, from.1 + 1),
            Orientation::Vertical => (from.0 + 1, from.1),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A rectangular maze stored as two wall matrices. `true` means the edge is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    /// `(width - 1) x height`
    vertical_walls: Grid<bool>,
    /// `width x (height - 1)`
    horizontal_walls: Grid<bool>,
}

impl Maze {
    /// Creates a new maze of `width` columns and `height` rows with every wall present.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Maze::filled(width, height, true)
    }

    /// Creates a maze with no interior wall at all.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn open(width: usize, height: usize) -> Self {
        Maze::filled(width, height, false)
    }

    fn filled(width: usize, height: usize, wall: bool) -> Self {
        assert!(
            width > 0 && height > 0,
            "Maze dimensions must be positive, got {}x{}",
            width,
            height
        );
        Maze {
            width,
            height,
            vertical_walls: Grid::new(width - 1, height, wall),
            horizontal_walls: Grid::new(width, height - 1, wall),
        }
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The entrance of every walk.
    pub fn start(&self) -> Coord {
        (0, 0)
    }

    /// The far corner, where every walk ends.
    pub fn target(&self) -> Coord {
        (self.width - 1, self.height - 1)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Whether `coord` lies on the outer border of the maze.
    pub fn is_border(&self, coord: Coord) -> bool {
        coord.0 == 0 || coord.1 == 0 || coord.0 == self.width - 1 || coord.1 == self.height - 1
    }

    fn walls(&self, orientation: Orientation) -> &Grid<bool> {
        match orientation {
            Orientation::Horizontal => &self.horizontal_walls,
            Orientation::Vertical => &self.vertical_walls,
        }
    }

    fn walls_mut(&mut self, orientation: Orientation) -> &mut Grid<bool> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal_walls,
            Orientation::Vertical => &mut self.vertical_walls,
        }
    }

    /// Looks up the wall after `from` in the given orientation.
    /// Returns `None` when there is no such interior wall position.
    pub fn wall(&self, from: Coord, orientation: Orientation) -> Option<bool> {
        self.walls(orientation).get(from).copied()
    }

    /// Checks if the wall after `from` exists.
    /// Positions outside of the interior wall matrices count as walls.
    pub fn is_wall_after(&self, from: Coord, orientation: Orientation) -> bool {
        self.wall(from, orientation).unwrap_or(true)
    }

    /// Checks if the edge after `from` is open.
    pub fn is_open_after(&self, from: Coord, orientation: Orientation) -> bool {
        self.wall(from, orientation) == Some(false)
    }

    /// Removes the wall after `from` in the given orientation.
    ///
    /// Returns `true` if a wall was removed, `false` if the edge was already open.
    ///
    /// # Panics
    /// If there is no interior wall at that position.
    pub fn remove_wall(&mut self, from: Coord, orientation: Orientation) -> bool {
        let (width, height) = (self.width, self.height);
        let Some(wall) = self.walls_mut(orientation).get_mut(from) else {
            panic!(
                "No {} wall after {:?} in a {}x{} maze",
                orientation, from, width, height
            );
        };
        std::mem::replace(wall, false)
    }

    /// Closes the edge after `from`. Returns `false` if the position does not exist.
    pub(crate) fn insert_wall(&mut self, from: Coord, orientation: Orientation) -> bool {
        match self.walls_mut(orientation).get_mut(from) {
            Some(wall) => {
                *wall = true;
                true
            }
            None => false,
        }
    }

    /// Returns the ordered list of cells reachable from `coord` through one open edge:
    /// `(i - 1, j)`, `(i, j - 1)`, `(i + 1, j)`, `(i, j + 1)`.
    ///
    /// Fails if the list would be empty while the maze has more than one cell,
    /// since every cell of a well formed maze has an open edge.
    pub fn neighbors(&self, coord: Coord) -> Result<Vec<Coord>, MazeError> {
        let (i, j) = coord;
        let mut result = Vec::with_capacity(4);
        if i > 0 && self.is_open_after((i - 1, j), Orientation::Vertical) {
            result.push((i - 1, j));
        }
        if j > 0 && self.is_open_after((i, j - 1), Orientation::Horizontal) {
            result.push((i, j - 1));
        }
        if self.is_open_after(coord, Orientation::Vertical) {
            result.push((i + 1, j));
        }
        if self.is_open_after(coord, Orientation::Horizontal) {
            result.push((i, j + 1));
        }
        if result.is_empty() && self.cell_count() > 1 {
            return Err(MazeError::Isolated { cell: coord });
        }
        Ok(result)
    }

    /// The wall separating two grid-adjacent cells, as `(from, orientation)` with `from`
    /// the upper-left one. `None` if the cells are not adjacent.
    pub fn edge_between(a: Coord, b: Coord) -> Option<(Coord, Orientation)> {
        match (a.0.abs_diff(b.0), a.1.abs_diff(b.1)) {
            (1, 0) => Some(((a.0.min(b.0), a.1), Orientation::Vertical)),
            (0, 1) => Some(((a.0, a.1.min(b.1)), Orientation::Horizontal)),
            _ => None,
        }
    }

    /// Every interior edge of the grid graph, vertical ones first.
    pub fn edges(&self) -> impl Iterator<Item = (Coord, Orientation)> + use<> {
        let (width, height) = (self.width, self.height);
        let vertical = (0..width - 1)
            .flat_map(move |i| (0..height).map(move |j| ((i, j), Orientation::Vertical)));
        let horizontal = (0..width)
            .flat_map(move |i| (0..height - 1).map(move |j| ((i, j), Orientation::Horizontal)));
        vertical.chain(horizontal)
    }

    /// Closed walls in persisted order: vertical first, then horizontal, column major.
    pub fn closed_walls(&self) -> impl Iterator<Item = (Coord, Orientation)> + '_ {
        self.edges()
            .filter(|&(from, orientation)| self.is_wall_after(from, orientation))
    }

    /// Number of open interior edges.
    pub fn open_edge_count(&self) -> usize {
        self.edges()
            .filter(|&(from, orientation)| self.is_open_after(from, orientation))
            .count()
    }

    /// Iterates over every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |i| (0..height).map(move |j| (i, j)))
    }
}
