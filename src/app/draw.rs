use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::{
    error::MazeError,
    maze::{Coord, Maze, Orientation},
};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const WALL: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PATH: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Pixel geometry of a maze picture.
#[derive(Debug, Clone, Copy)]
pub struct DrawStyle {
    /// Side of one cell
    pub cell_size: u32,
    /// Blank space around the outer walls
    pub margin: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            cell_size: 40,
            margin: 10,
        }
    }
}

impl DrawStyle {
    /// Pixel dimensions of the picture of `maze`, `None` if they do not fit an image buffer.
    pub fn image_size(&self, maze: &Maze) -> Option<(u32, u32)> {
        let side = |cells: usize| {
            u32::try_from(cells)
                .ok()?
                .checked_mul(self.cell_size)?
                .checked_add(self.margin.checked_mul(2)?)
        };
        let (width, height) = (side(maze.width())?, side(maze.height())?);
        // RGBA, four bytes per pixel
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)
            .filter(|&bytes| bytes <= isize::MAX as usize)?;
        Some((width, height))
    }

    /// Only called on coordinates whose picture passed `image_size`.
    fn corner(&self, (i, j): Coord) -> (i64, i64) {
        let (margin, cell) = (self.margin as i64, self.cell_size as i64);
        (margin + cell * i as i64, margin + cell * j as i64)
    }

    fn center(&self, coord: Coord) -> (i64, i64) {
        let (x, y) = self.corner(coord);
        let half = (self.cell_size / 2) as i64;
        (x + half, y + half)
    }
}

/// Draws an axis-aligned segment three pixels thick.
fn line(image: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: Rgba<u8>) {
    let (x0, x1) = (from.0.min(to.0) - 1, from.0.max(to.0) + 1);
    let (y0, y1) = (from.1.min(to.1) - 1, from.1.max(to.1) + 1);
    let (width, height) = (image.width() as i64, image.height() as i64);
    for x in x0.max(0)..=x1.min(width - 1) {
        for y in y0.max(0)..=y1.min(height - 1) {
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Renders the walls of `maze` and, if given, a path leading from `(0, 0)` through `path`.
pub fn render(
    maze: &Maze,
    path: Option<&[Coord]>,
    style: DrawStyle,
) -> Result<RgbaImage, MazeError> {
    let (width, height) = (maze.width(), maze.height());
    let (image_width, image_height) = style
        .image_size(maze)
        .ok_or(MazeError::ImageTooLarge { width, height })?;
    let mut image = RgbaImage::from_pixel(image_width, image_height, BACKGROUND);

    // Outer border
    line(&mut image, style.corner((0, 0)), style.corner((width, 0)), WALL);
    line(&mut image, style.corner((0, 0)), style.corner((0, height)), WALL);
    line(
        &mut image,
        style.corner((width, 0)),
        style.corner((width, height)),
        WALL,
    );
    line(
        &mut image,
        style.corner((0, height)),
        style.corner((width, height)),
        WALL,
    );

    for ((i, j), orientation) in maze.closed_walls() {
        let (from, to) = match orientation {
            Orientation::Vertical => ((i + 1, j), (i + 1, j + 1)),
            Orientation::Horizontal => ((i, j + 1), (i + 1, j + 1)),
        };
        line(&mut image, style.corner(from), style.corner(to), WALL);
    }

    if let Some(path) = path {
        let mut previous = style.center(maze.start());
        for &cell in path {
            let next = style.center(cell);
            line(&mut image, previous, next, PATH);
            previous = next;
        }
    }
    Ok(image)
}

/// Renders `maze` with the default style and saves it, the format following the extension.
pub fn save_drawing(maze: &Maze, path: Option<&[Coord]>, file: &Path) -> Result<(), MazeError> {
    render(maze, path, DrawStyle::default())?.save(file)?;
    tracing::info!("Maze drawing saved to {}", file.display());
    Ok(())
}
