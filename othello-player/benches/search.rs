use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use othello_player::select_best_move;
use othello_rules::{Board, Player};

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_best_move");
    group.sample_size(20);

    let midgame: Board = "
        ........
        ........
        ..XXXO..
        ..OXO...
        ..OOXX..
        ...X.O..
        ........
        ........"
        .parse()
        .expect("benchmark board should parse");

    for depth in 1..5 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| select_best_move(black_box(&midgame), Player::Black, depth))
        });
    }

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = search;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_search
}

#[cfg(not(unix))]
criterion_group! {
    name = search;
    config = Criterion::default();
    targets = criterion_search
}

criterion_main!(search);
