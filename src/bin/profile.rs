use std::time::Instant;

use mazewalk::generators::{UnionFindKind, generate_maze, get_rng};

const SIZE: usize = 300;

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    for kind in [UnionFindKind::Fast, UnionFindKind::Slow] {
        let mut rng = get_rng(Some(0));
        let start = Instant::now();
        for _ in 0..num_iters {
            let maze = generate_maze(SIZE, SIZE, kind, &mut rng);
            debug_assert_eq!(maze.open_edge_count(), SIZE * SIZE - 1);
        }
        let elapsed = start.elapsed();
        println!(
            "{}: {} mazes of {}x{} in {:?} ({:?} each)",
            kind,
            num_iters,
            SIZE,
            SIZE,
            elapsed,
            elapsed / num_iters.max(1) as u32
        );
    }
}
