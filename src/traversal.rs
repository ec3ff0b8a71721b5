use crate::{
    error::{MazeError, MoveError},
    maze::{Coord, Maze, grid::Grid},
};

/// Read-only snapshot of a walk handed to observers.
#[derive(Clone, Copy)]
pub struct VisitView<'a> {
    pub maze: &'a Maze,
    pub current: Coord,
    pub visited: &'a Grid<bool>,
    pub visit_length: usize,
}

/// Something that watches a walk, e.g. a terminal display.
pub trait VisitObserver {
    /// Called once when the walk is created.
    fn on_start(&mut self, _view: VisitView<'_>) -> std::io::Result<()> {
        Ok(())
    }

    /// Called after every successful move.
    fn on_move(&mut self, view: VisitView<'_>) -> std::io::Result<()>;

    /// Called once when the walk reaches its target.
    fn on_finish(&mut self, _view: VisitView<'_>) -> std::io::Result<()> {
        Ok(())
    }
}

/// One walk through a maze, from `(0, 0)` to the far corner.
///
/// The walker can only change position through [`Traversal::move_to`], which checks the move
/// against the walls itself instead of trusting the caller.
pub struct Traversal<'a> {
    maze: &'a Maze,
    current: Coord,
    target: Coord,
    visited: Grid<bool>,
    /// Cells entered so far, the start included
    visit_length: usize,
    observer: Option<&'a mut dyn VisitObserver>,
}

impl<'a> Traversal<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        let start = maze.start();
        let mut visited = Grid::new(maze.width(), maze.height(), false);
        visited[start] = true;
        let traversal = Traversal {
            maze,
            current: start,
            target: maze.target(),
            visited,
            visit_length: 1,
            observer: None,
        };
        if traversal.is_finish() {
            traversal.report_finish();
        }
        traversal
    }

    /// Starts a walk that reports every step to `observer`.
    pub fn with_observer(
        maze: &'a Maze,
        observer: &'a mut dyn VisitObserver,
    ) -> Result<Self, MazeError> {
        let mut traversal = Traversal::new(maze);
        traversal.observer = Some(observer);
        traversal.notify(|observer, view| observer.on_start(view))?;
        if traversal.is_finish() {
            traversal.notify(|observer, view| observer.on_finish(view))?;
        }
        Ok(traversal)
    }

    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    pub fn current(&self) -> Coord {
        self.current
    }

    pub fn target(&self) -> Coord {
        self.target
    }

    pub fn visit_length(&self) -> usize {
        self.visit_length
    }

    pub fn visited(&self) -> &Grid<bool> {
        &self.visited
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited.get(coord).copied().unwrap_or(false)
    }

    pub fn current_neighbors(&self) -> Result<Vec<Coord>, MazeError> {
        self.maze.neighbors(self.current)
    }

    pub fn is_finish(&self) -> bool {
        self.current == self.target
    }

    /// Marks `coord` as visited without moving there or counting a step.
    /// Returns `true` if it was not visited before.
    pub fn mark_visited(&mut self, coord: Coord) -> bool {
        match self.visited.get_mut(coord) {
            Some(visited) => !std::mem::replace(visited, true),
            None => false,
        }
    }

    fn check_move(&self, next: Coord) -> Result<(), MoveError> {
        let (from, orientation) =
            Maze::edge_between(self.current, next).ok_or(MoveError::NotAdjacent)?;
        match self.maze.wall(from, orientation) {
            Some(false) => Ok(()),
            Some(true) => Err(MoveError::WallExists),
            // Outside of the maze
            None => Err(MoveError::NotAdjacent),
        }
    }

    /// Moves to `next`, which must be grid-adjacent to the current cell through an open edge.
    pub fn move_to(&mut self, next: Coord) -> Result<(), MazeError> {
        self.check_move(next)
            .map_err(|reason| MazeError::InvalidMove {
                from: self.current,
                to: next,
                reason,
            })?;
        tracing::trace!("Moving from {:?} to {:?}", self.current, next);
        self.current = next;
        self.visited[next] = true;
        self.visit_length += 1;

        self.notify(|observer, view| observer.on_move(view))?;
        if self.is_finish() {
            self.report_finish();
            self.notify(|observer, view| observer.on_finish(view))?;
        }
        Ok(())
    }

    fn report_finish(&self) {
        tracing::info!("Total visit length: {}", self.visit_length);
    }

    fn notify(
        &mut self,
        event: impl FnOnce(&mut dyn VisitObserver, VisitView<'_>) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        let Some(observer) = self.observer.as_deref_mut() else {
            return Ok(());
        };
        let view = VisitView {
            maze: self.maze,
            current: self.current,
            visited: &self.visited,
            visit_length: self.visit_length,
        };
        event(observer, view)
    }
}
