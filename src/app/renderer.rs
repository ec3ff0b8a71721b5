use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    maze::{
        Maze,
        cell::VisitCell,
        grid::Grid,
        text::{Tile, layout},
    },
    traversal::{VisitObserver, VisitView},
};

/// Redraws the maze in the terminal while a walk goes on.
pub struct TerminalRenderer<W: Write = Stdout> {
    /// Where the frames are written
    out: W,
    /// Character layout of the maze, computed once
    tiles: Grid<Tile>,
    /// Time to wait before each redraw
    delay: Duration,
    /// Redraw every this many moves
    interval: usize,
    /// Moves since the last redraw
    pending: usize,
    /// Cleared when the terminal is too small to hold the maze
    enabled: bool,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(maze: &Maze, delay: Duration, interval: usize) -> Self {
        let mut renderer = TerminalRenderer::new(std::io::stdout(), maze, delay, interval);
        if let Ok((term_width, term_height)) = terminal::size() {
            let (width, height) = (renderer.tiles.width(), renderer.tiles.height());
            if (term_width as usize) < width * VisitCell::CELL_WIDTH as usize
                || (term_height as usize) < height
            {
                tracing::warn!(
                    "Terminal is {}x{}, the maze needs {}x{}; display disabled",
                    term_width,
                    term_height,
                    width,
                    height
                );
                renderer.enabled = false;
            }
        }
        renderer
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, maze: &Maze, delay: Duration, interval: usize) -> Self {
        Self {
            out,
            tiles: layout(maze),
            delay,
            interval: interval.max(1),
            pending: 0,
            enabled: true,
        }
    }

    fn draw(&mut self, view: VisitView<'_>) -> std::io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for y in 0..self.tiles.height() {
            for x in 0..self.tiles.width() {
                let cell =
                    VisitCell::from_tile(self.tiles[(x, y)], view.current, |c| view.visited[c]);
                self.out.queue(style::Print(cell))?;
            }
            self.out.queue(style::Print("\r\n"))?;
        }
        self.out.flush()
    }
}

impl<W: Write> VisitObserver for TerminalRenderer<W> {
    fn on_start(&mut self, view: VisitView<'_>) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.out.queue(cursor::Hide)?;
        self.draw(view)
    }

    fn on_move(&mut self, view: VisitView<'_>) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.pending += 1;
        if self.pending < self.interval {
            return Ok(());
        }
        self.pending = 0;
        std::thread::sleep(self.delay);
        self.draw(view)
    }

    fn on_finish(&mut self, view: VisitView<'_>) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.draw(view)?;
        queue!(
            self.out,
            style::PrintStyledContent(
                format!("Visit length: {}\r\n", view.visit_length)
                    .with(Color::Green)
                    .attribute(Attribute::Bold)
            ),
            cursor::Show
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Traversal;

    fn frames(output: &[u8]) -> usize {
        String::from_utf8_lossy(output).matches('◇').count()
    }

    #[test]
    fn test_redraws_every_interval() {
        let maze: Maze = "5 1\n".parse().unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new(), &maze, Duration::ZERO, 2);
        {
            let mut traversal = Traversal::with_observer(&maze, &mut renderer).unwrap();
            for i in 1..5 {
                traversal.move_to((i, 0)).unwrap();
            }
        }
        // Start, moves 2 and 4, then the final frame
        assert_eq!(frames(&renderer.out), 4);
        let output = String::from_utf8_lossy(&renderer.out);
        assert!(output.contains("Visit length: 5"));
    }

    #[test]
    fn test_disabled_renderer_writes_nothing() {
        let maze: Maze = "2 1\n".parse().unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new(), &maze, Duration::ZERO, 1);
        renderer.enabled = false;
        {
            let mut traversal = Traversal::with_observer(&maze, &mut renderer).unwrap();
            traversal.move_to((1, 0)).unwrap();
        }
        assert!(renderer.out.is_empty());
    }
}
