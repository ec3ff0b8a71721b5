//! The three things the command line does: generate, visit and replay the shortest path.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
    time::Duration,
};

pub mod draw;
pub mod logging;
pub mod renderer;

use crate::{
    error::MazeError,
    generators::{UnionFindKind, generate_maze, get_rng, remove_random_walls},
    maze::{
        Coord, Maze,
        format::{read_maze, write_maze},
    },
    solvers::{
        Solver,
        shortest::{ShortestPath, follow_path, shortest_path},
        solve_maze,
    },
    traversal::{Traversal, VisitObserver, VisitView},
};
use renderer::TerminalRenderer;

pub fn load_maze(path: &Path) -> Result<Maze, MazeError> {
    let maze = read_maze(BufReader::new(File::open(path)?))?;
    tracing::info!(
        "Read {}x{} maze from {}",
        maze.width(),
        maze.height(),
        path.display()
    );
    Ok(maze)
}

pub fn save_maze(maze: &Maze, path: &Path) -> Result<(), MazeError> {
    write_maze(maze, BufWriter::new(File::create(path)?))?;
    tracing::info!("Maze saved to {}", path.display());
    Ok(())
}

/// How a walk is shown in the terminal.
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    /// Pause before each redraw
    pub delay: Duration,
    /// Moves between two redraws
    pub interval: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs_f64(0.05),
            interval: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub width: usize,
    pub height: usize,
    pub union_find: UnionFindKind,
    /// Walls to open after carving, each one adding a cycle
    pub extra_walls: usize,
    pub seed: Option<u64>,
}

/// Carves a perfect maze, then opens `extra_walls` more walls.
pub fn generate(options: &GenerateOptions) -> Result<Maze, MazeError> {
    let mut rng = get_rng(options.seed);
    tracing::info!(
        "Generating {}x{} maze: {}",
        options.width,
        options.height,
        options.union_find
    );
    let mut maze = generate_maze(options.width, options.height, options.union_find, &mut rng);
    if options.extra_walls > 0 {
        remove_random_walls(&mut maze, options.extra_walls, &mut rng)?;
    }
    Ok(maze)
}

#[derive(Debug, Clone)]
pub struct VisitOptions {
    pub solver: Solver,
    /// Runs to average over; deterministic solvers always run once
    pub repetitions: usize,
    pub step_limit: Option<usize>,
    pub seed: Option<u64>,
    pub display: Option<DisplayOptions>,
    /// Keep the cells entered by the last run
    pub record_walk: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisitReport {
    /// Visit length of every run
    pub lengths: Vec<usize>,
    /// Cells entered by the last run, the start excluded
    pub walk: Option<Vec<Coord>>,
}

impl VisitReport {
    pub fn average(&self) -> f64 {
        if self.lengths.is_empty() {
            return 0.0;
        }
        self.lengths.iter().sum::<usize>() as f64 / self.lengths.len() as f64
    }
}

/// Forwards a walk to the terminal and remembers where it went.
struct WalkObserver {
    renderer: Option<TerminalRenderer>,
    walk: Option<Vec<Coord>>,
}

impl VisitObserver for WalkObserver {
    fn on_start(&mut self, view: VisitView<'_>) -> std::io::Result<()> {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.on_start(view),
            None => Ok(()),
        }
    }

    fn on_move(&mut self, view: VisitView<'_>) -> std::io::Result<()> {
        if let Some(walk) = self.walk.as_mut() {
            walk.push(view.current);
        }
        match self.renderer.as_mut() {
            Some(renderer) => renderer.on_move(view),
            None => Ok(()),
        }
    }

    fn on_finish(&mut self, view: VisitView<'_>) -> std::io::Result<()> {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.on_finish(view),
            None => Ok(()),
        }
    }
}

/// Walks `maze` with `options.solver`, once per repetition for randomized solvers.
pub fn visit(maze: &Maze, options: &VisitOptions) -> Result<VisitReport, MazeError> {
    let mut rng = get_rng(options.seed);
    let runs = if options.solver.is_randomized() {
        options.repetitions.max(1)
    } else {
        if options.repetitions > 1 {
            tracing::info!(
                "{} is deterministic, running it once instead of {} times",
                options.solver,
                options.repetitions
            );
        }
        1
    };

    let mut lengths = Vec::with_capacity(runs);
    let mut walk = None;
    for run in 0..runs {
        let last = run + 1 == runs;
        let mut observer = WalkObserver {
            renderer: options
                .display
                .map(|d| TerminalRenderer::stdout(maze, d.delay, d.interval)),
            walk: (last && options.record_walk).then(Vec::new),
        };
        let length = {
            let mut traversal = Traversal::with_observer(maze, &mut observer)?;
            solve_maze(&mut traversal, options.solver, &mut rng, options.step_limit)?
        };
        tracing::info!("Run {}/{}: visit length {}", run + 1, runs, length);
        lengths.push(length);
        if last {
            walk = observer.walk;
        }
    }
    Ok(VisitReport { lengths, walk })
}

/// Finds the shortest path by breadth-first search, then replays it move by move.
pub fn shortest(maze: &Maze, display: Option<DisplayOptions>) -> Result<ShortestPath, MazeError> {
    let result = shortest_path(maze)?;
    let mut observer = WalkObserver {
        renderer: display.map(|d| TerminalRenderer::stdout(maze, d.delay, d.interval)),
        walk: None,
    };
    let mut traversal = Traversal::with_observer(maze, &mut observer)?;
    let length = follow_path(&mut traversal, &result.path)?;
    debug_assert!(traversal.is_finish());
    tracing::info!("Shortest path visit length: {}", length);
    Ok(result)
}
