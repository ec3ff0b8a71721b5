use crossterm::style::{Color, Stylize};

use std::fmt;

use super::text::Tile;

/// What a character position shows while a walk is being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitCell {
    Wall,
    /// Open passage between two cells.
    Passage,
    /// A cell not entered yet.
    Unvisited,
    Visited,
    /// Where the walker currently stands.
    Current,
}

impl VisitCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 1;

    /// Classifies a layout tile given the walker's state.
    pub fn from_tile(
        tile: Tile,
        current: (usize, usize),
        is_visited: impl Fn((usize, usize)) -> bool,
    ) -> Self {
        match tile {
            Tile::Wall => VisitCell::Wall,
            Tile::Passage => VisitCell::Passage,
            Tile::Cell(coord) if coord == current => VisitCell::Current,
            Tile::Cell(coord) if is_visited(coord) => VisitCell::Visited,
            Tile::Cell(_) => VisitCell::Unvisited,
        }
    }

    /// Unstyled glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            VisitCell::Wall => "█",
            VisitCell::Passage | VisitCell::Unvisited => " ",
            VisitCell::Visited => "‧",
            VisitCell::Current => "◇",
        }
    }
}

impl fmt::Display for VisitCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            VisitCell::Wall => self.symbol().with(Color::White),
            VisitCell::Passage | VisitCell::Unvisited => self.symbol().with(Color::Reset),
            VisitCell::Visited => self.symbol().with(Color::Blue),
            VisitCell::Current => self.symbol().with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                VisitCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly one character width."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tile() {
        let visited = |c: (usize, usize)| c == (1, 0);
        assert_eq!(
            VisitCell::from_tile(Tile::Cell((0, 0)), (0, 0), visited),
            VisitCell::Current
        );
        assert_eq!(
            VisitCell::from_tile(Tile::Cell((1, 0)), (0, 0), visited),
            VisitCell::Visited
        );
        assert_eq!(
            VisitCell::from_tile(Tile::Cell((2, 0)), (0, 0), visited),
            VisitCell::Unvisited
        );
        assert_eq!(
            VisitCell::from_tile(Tile::Passage, (0, 0), visited),
            VisitCell::Passage
        );
    }

    #[test]
    fn test_symbols_are_single_width() {
        use unicode_width::UnicodeWidthStr;
        for cell in [
            VisitCell::Wall,
            VisitCell::Passage,
            VisitCell::Unvisited,
            VisitCell::Visited,
            VisitCell::Current,
        ] {
            assert_eq!(cell.symbol().width(), 1, "{:?}", cell);
        }
    }
}
