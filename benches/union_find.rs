use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mazewalk::generators::{UnionFindKind, generate_maze, get_rng};

const WIDTH: usize = 200;
const HEIGHT: usize = 200;

pub fn kruskal_fast(c: &mut Criterion) {
    c.bench_function("kruskal_fast", |b| {
        let mut rng = get_rng(Some(0));
        b.iter(|| {
            generate_maze(
                black_box(WIDTH),
                black_box(HEIGHT),
                UnionFindKind::Fast,
                &mut rng,
            )
        })
    });
}

pub fn kruskal_slow(c: &mut Criterion) {
    c.bench_function("kruskal_slow", |b| {
        let mut rng = get_rng(Some(0));
        b.iter(|| {
            generate_maze(
                black_box(WIDTH),
                black_box(HEIGHT),
                UnionFindKind::Slow,
                &mut rng,
            )
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = kruskal_fast, kruskal_slow}
criterion_main!(benches);
