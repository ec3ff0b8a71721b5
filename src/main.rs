use std::{num::NonZeroUsize, path::PathBuf, process::ExitCode, time::Duration};

use clap::{Args, Parser, Subcommand};

use mazewalk::{
    MazeError,
    app::{
        self, DisplayOptions, GenerateOptions, VisitOptions, draw::save_drawing,
        logging::init_logging,
    },
    generators::UnionFindKind,
    maze::{format::write_maze, text},
    solvers::Solver,
};

/// Generate perfect mazes and watch bounded-memory walkers find their way out
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides it
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Carve a random perfect maze
    Generate(GenerateArgs),
    /// Walk a maze with one of the strategies
    Visit(VisitArgs),
    /// Find and replay the shortest path
    Shortest(ShortestArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    width: NonZeroUsize,
    height: NonZeroUsize,

    /// Output file, stdout if missing
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use union-find without path compression
    #[arg(long)]
    slow: bool,

    /// Extra walls to remove after carving
    #[arg(short = 'r', long = "remove", default_value_t = 0)]
    remove: usize,

    /// Print the maze with box drawing characters
    #[arg(short, long)]
    show: bool,

    /// Print the maze with block characters, one per wall or cell
    #[arg(long)]
    wide: bool,

    /// Draw the maze into an image file
    #[arg(short, long)]
    draw: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Do not display the walk
    #[arg(short, long)]
    quiet: bool,

    /// Seconds to wait before each redraw
    #[arg(short, long, default_value = "0.05", value_parser = parse_delay)]
    delay: Duration,

    /// Moves between two redraws
    #[arg(short, long, default_value_t = 1)]
    interval: usize,
}

fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds = value
        .parse::<f64>()
        .map_err(|err| format!("`{}` is not a number: {}", value, err))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|err| format!("`{}` is not a valid delay: {}", value, err))
}

impl DisplayArgs {
    fn options(&self) -> Option<DisplayOptions> {
        (!self.quiet).then(|| DisplayOptions {
            delay: self.delay,
            interval: self.interval,
        })
    }
}

#[derive(Args, Debug)]
struct VisitArgs {
    input: PathBuf,

    #[arg(value_enum)]
    solver: Solver,

    #[command(flatten)]
    display: DisplayArgs,

    /// Runs to average over, randomized strategies only
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,

    /// Give up after this many moves
    #[arg(long)]
    max_steps: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Draw the maze and the last walk into an image file
    #[arg(long)]
    draw: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ShortestArgs {
    input: PathBuf,

    #[command(flatten)]
    display: DisplayArgs,

    /// Draw the maze and the path into an image file
    #[arg(long)]
    draw: Option<PathBuf>,
}

fn generate(args: GenerateArgs) -> Result<(), MazeError> {
    let maze = app::generate(&GenerateOptions {
        width: args.width.get(),
        height: args.height.get(),
        union_find: if args.slow {
            UnionFindKind::Slow
        } else {
            UnionFindKind::Fast
        },
        extra_walls: args.remove,
        seed: args.seed,
    })?;

    match &args.output {
        Some(path) => app::save_maze(&maze, path)?,
        None => write_maze(&maze, std::io::stdout().lock())?,
    }
    if args.show {
        print!("{}", text::compact(&maze));
    }
    if args.wide {
        print!("{}", text::wide(&maze));
    }
    if let Some(image) = &args.draw {
        save_drawing(&maze, None, image)?;
    }
    Ok(())
}

fn visit(args: VisitArgs) -> Result<(), MazeError> {
    let maze = app::load_maze(&args.input)?;
    let report = app::visit(
        &maze,
        &VisitOptions {
            solver: args.solver,
            repetitions: args.repeat,
            step_limit: args.max_steps,
            seed: args.seed,
            display: args.display.options(),
            record_walk: args.draw.is_some(),
        },
    )?;

    if args.solver.is_randomized() {
        println!("Average: {}", report.average());
    } else {
        let length = report.lengths.first().copied().unwrap_or(0);
        println!("Visit length: {}", length);
    }
    if let Some(image) = &args.draw {
        save_drawing(&maze, report.walk.as_deref(), image)?;
    }
    Ok(())
}

fn shortest(args: ShortestArgs) -> Result<(), MazeError> {
    let maze = app::load_maze(&args.input)?;
    let result = app::shortest(&maze, args.display.options())?;
    if !result.is_perfect {
        println!("Imperfect maze!");
    }
    println!("Shortest path length: {}", result.path.len() + 1);
    if let Some(image) = &args.draw {
        save_drawing(&maze, Some(&result.path), image)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref());

    let result = match cli.command {
        Command::Generate(args) => generate(args),
        Command::Visit(args) => visit(args),
        Command::Shortest(args) => shortest(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
