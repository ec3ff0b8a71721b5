//! Line oriented maze format.
//!
//! The first line holds `width height`. Every following line names one closed wall as
//! `i j V` (between `(i, j)` and `(i + 1, j)`) or `i j H` (between `(i, j)` and `(i, j + 1)`).
//! A wall without a line is open.

use std::io::{BufRead, Write};

use super::{Maze, Orientation};
use crate::error::{FormatErrorKind, MazeError};

/// Writes `maze` in the line format.
pub fn write_maze<W: Write>(maze: &Maze, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{} {}", maze.width(), maze.height())?;
    for ((i, j), orientation) in maze.closed_walls() {
        writeln!(writer, "{} {} {}", i, j, orientation.token())?;
    }
    writer.flush()
}

/// Reads a maze in the line format, reporting the 1-based line of the first error.
pub fn read_maze<R: BufRead>(reader: R) -> Result<Maze, MazeError> {
    let mut lines = reader.lines();
    let header = lines.next().transpose()?.ok_or(MazeError::Format {
        line: 1,
        kind: FormatErrorKind::MissingHeader,
    })?;
    let mut maze = parse_header(&header).map_err(|kind| MazeError::Format { line: 1, kind })?;

    for (idx, line) in lines.enumerate() {
        let line_number = idx + 2;
        let line = line?;
        parse_wall(&line, &mut maze).map_err(|kind| MazeError::Format {
            line: line_number,
            kind,
        })?;
    }
    tracing::debug!(
        "Loaded {}x{} maze with {} closed walls",
        maze.width(),
        maze.height(),
        maze.closed_walls().count()
    );
    Ok(maze)
}

fn tokens<const N: usize>(line: &str) -> Result<[&str; N], FormatErrorKind> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    tokens
        .as_slice()
        .try_into()
        .map_err(|_| FormatErrorKind::TokenCount {
            expected: N,
            found: tokens.len(),
        })
}

fn parse_int(token: &str) -> Result<i64, FormatErrorKind> {
    token
        .parse::<i64>()
        .map_err(|_| FormatErrorKind::NotAnInteger(token.to_string()))
}

fn parse_header(line: &str) -> Result<Maze, FormatErrorKind> {
    let [width, height] = tokens::<2>(line)?;
    let (width, height) = (parse_int(width)?, parse_int(height)?);
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Maze::open(w, h)),
        _ => Err(FormatErrorKind::InvalidDimensions { width, height }),
    }
}

fn parse_wall(line: &str, maze: &mut Maze) -> Result<(), FormatErrorKind> {
    let [i, j, kind] = tokens::<3>(line)?;
    let (i, j) = (parse_int(i)?, parse_int(j)?);
    let orientation = match kind {
        "V" => Orientation::Vertical,
        "H" => Orientation::Horizontal,
        other => return Err(FormatErrorKind::UnknownKind(other.to_string())),
    };
    let in_range = match (usize::try_from(i), usize::try_from(j)) {
        (Ok(i), Ok(j)) => maze.insert_wall((i, j), orientation),
        _ => false,
    };
    if in_range {
        Ok(())
    } else {
        Err(FormatErrorKind::OutOfRange { i, j, orientation })
    }
}

impl std::str::FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_maze(s.as_bytes())
    }
}

impl Maze {
    /// Encodes the maze in the line format.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        write_maze(self, &mut buf).ok();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{UnionFindKind, generate_maze, get_rng, remove_random_walls};

    fn format_error(input: &str) -> (usize, FormatErrorKind) {
        match input.parse::<Maze>() {
            Err(MazeError::Format { line, kind }) => (line, kind),
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_partially_walled() {
        let maze: Maze = "2 2\n0 0 H\n".parse().unwrap();
        assert_eq!(maze.open_edge_count(), 3);
        let neighbors = maze.neighbors((0, 0)).unwrap();
        assert!(!neighbors.contains(&(0, 1)));
        assert!(neighbors.contains(&(1, 0)));
    }

    #[test]
    fn test_encode_lists_closed_walls() {
        let mut maze = Maze::new(2, 2);
        maze.remove_wall((0, 0), Orientation::Vertical);
        maze.remove_wall((1, 0), Orientation::Horizontal);
        assert_eq!(maze.to_text(), "2 2\n0 1 V\n0 0 H\n");
    }

    #[test]
    fn test_round_trip_generated() {
        let mut rng = get_rng(Some(11));
        let mut maze = generate_maze(9, 6, UnionFindKind::Fast, &mut rng);
        remove_random_walls(&mut maze, 5, &mut rng).unwrap();
        let text = maze.to_text();
        let decoded: Maze = text.parse().unwrap();
        assert_eq!(decoded, maze);
        assert_eq!(decoded.to_text(), text);
    }

    #[test]
    fn test_wrong_token_count_reports_line() {
        assert_eq!(
            format_error("3 3\n0 0\n"),
            (
                2,
                FormatErrorKind::TokenCount {
                    expected: 3,
                    found: 2
                }
            )
        );
        assert_eq!(
            format_error("3\n").1,
            FormatErrorKind::TokenCount {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_bad_tokens() {
        assert_eq!(
            format_error("3 3\n0 0 V\n1 x H\n"),
            (3, FormatErrorKind::NotAnInteger("x".to_string()))
        );
        assert_eq!(
            format_error("3 3\n0 0 D\n"),
            (2, FormatErrorKind::UnknownKind("D".to_string()))
        );
        assert_eq!(format_error("").0, 1);
        assert_eq!(
            format_error("0 4\n").1,
            FormatErrorKind::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn test_out_of_range_depends_on_kind() {
        // (2, 0) is a valid horizontal wall in a 3x3 maze but not a vertical one
        assert!("3 3\n2 0 H\n".parse::<Maze>().is_ok());
        assert_eq!(
            format_error("3 3\n2 0 V\n"),
            (
                2,
                FormatErrorKind::OutOfRange {
                    i: 2,
                    j: 0,
                    orientation: Orientation::Vertical
                }
            )
        );
        assert_eq!(format_error("3 3\n-1 0 H\n").0, 2);
    }

    #[test]
    fn test_error_message_names_line() {
        let err = "2 2\n0 0\n".parse::<Maze>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line 2, error: line should have 3 tokens, not 2"
        );
    }
}
