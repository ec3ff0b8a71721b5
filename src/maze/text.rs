//! Plain text views of a maze. Both are pure functions of the wall state.

use super::{Coord, Maze, Orientation, grid::Grid};

/// One character position of the wide view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Wall segment or wall corner.
    Wall,
    /// Open edge between two cells.
    Passage,
    /// A maze cell.
    Cell(Coord),
}

/// Lays the maze out on a `(2 * width + 1) x (2 * height + 1)` grid of tiles,
/// with the outer border always walled.
pub fn layout(maze: &Maze) -> Grid<Tile> {
    let grid_width = maze.width() * 2 + 1;
    let grid_height = maze.height() * 2 + 1;
    let mut tiles = Grid::new(grid_width, grid_height, Tile::Wall);
    for y in 0..grid_height {
        for x in 0..grid_width {
            let tile = match (x % 2, y % 2) {
                (1, 1) => Tile::Cell(((x - 1) / 2, (y - 1) / 2)),
                // Vertical wall segment between two cells of the same row
                (0, 1) if x != 0 && x != grid_width - 1 => {
                    wall_tile(maze, (x / 2 - 1, (y - 1) / 2), Orientation::Vertical)
                }
                (1, 0) if y != 0 && y != grid_height - 1 => {
                    wall_tile(maze, ((x - 1) / 2, y / 2 - 1), Orientation::Horizontal)
                }
                _ => Tile::Wall,
            };
            tiles[(x, y)] = tile;
        }
    }
    tiles
}

fn wall_tile(maze: &Maze, from: Coord, orientation: Orientation) -> Tile {
    if maze.is_wall_after(from, orientation) {
        Tile::Wall
    } else {
        Tile::Passage
    }
}

/// Wide block form: `█` for walls, spaces for cells and passages.
pub fn wide(maze: &Maze) -> String {
    let tiles = layout(maze);
    let mut out = String::with_capacity((tiles.width() + 1) * tiles.height());
    for y in 0..tiles.height() {
        for x in 0..tiles.width() {
            out.push(match tiles[(x, y)] {
                Tile::Wall => '█',
                Tile::Passage | Tile::Cell(_) => ' ',
            });
        }
        out.push('\n');
    }
    out
}

/// Wall test that also reports the virtual border walls around the maze.
/// `i` and `j` may be `-1`.
fn border_aware_wall(maze: &Maze, i: isize, j: isize, orientation: Orientation) -> bool {
    let (width, height) = (maze.width() as isize, maze.height() as isize);
    match orientation {
        Orientation::Vertical => {
            if i >= 0 && j >= 0 && i < width - 1 && j < height {
                maze.is_wall_after((i as usize, j as usize), orientation)
            } else {
                (i == -1 || i == width - 1) && (0..height).contains(&j)
            }
        }
        Orientation::Horizontal => {
            if i >= 0 && j >= 0 && i < width && j < height - 1 {
                maze.is_wall_after((i as usize, j as usize), orientation)
            } else {
                (j == -1 || j == height - 1) && (0..width).contains(&i)
            }
        }
    }
}

/// Box drawing glyph for a wall junction, keyed by its (left, up, right, down) arms.
fn junction(left: bool, up: bool, right: bool, down: bool) -> char {
    match (left, up, right, down) {
        (true, true, true, true) => '┼',
        (true, true, true, false) => '┴',
        (true, true, false, true) => '┤',
        (true, true, false, false) => '┘',
        (true, false, true, true) => '┬',
        (true, false, true, false) => '─',
        (true, false, false, true) => '┐',
        (true, false, false, false) => '╴',
        (false, true, true, true) => '├',
        (false, true, true, false) => '└',
        (false, true, false, true) => '│',
        (false, true, false, false) => '╵',
        (false, false, true, true) => '┌',
        (false, false, true, false) => '╶',
        (false, false, false, true) => '╷',
        (false, false, false, false) => ' ',
    }
}

/// Compact form: one box drawing character per grid vertex.
pub fn compact(maze: &Maze) -> String {
    let (width, height) = (maze.width() as isize, maze.height() as isize);
    let mut out = String::new();
    for j in 0..=height {
        for i in 0..=width {
            out.push(junction(
                border_aware_wall(maze, i - 1, j - 1, Orientation::Horizontal),
                border_aware_wall(maze, i - 1, j - 1, Orientation::Vertical),
                border_aware_wall(maze, i, j - 1, Orientation::Horizontal),
                border_aware_wall(maze, i - 1, j, Orientation::Vertical),
            ));
        }
        out.push('\n');
    }
    out
}
