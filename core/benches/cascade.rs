use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use shapematch_core::*;

/// Plays up to `swaps` legal moves, resolving each cascade to completion.
fn play(engine: &mut MatchEngine, swaps: usize) -> usize {
    let size = engine.size();
    let mut played = 0;
    'search: while played < swaps {
        for (x, y) in engine.grid().coords() {
            for other in [(x + 1, y), (x, y + 1)] {
                if other.0 >= size || other.1 >= size {
                    continue;
                }
                if engine.request_swap((x, y), other).is_accepted() {
                    engine.resolve_all();
                    played += 1;
                    continue 'search;
                }
            }
        }
        break;
    }
    played
}

fn bench_new_session(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut seed = 0;
    c.bench_function("new_session_16x16", |b| {
        b.iter(|| {
            seed += 1;
            MatchEngine::seeded(config, black_box(seed))
        })
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let mut source = RandomShapeSource::new(11);
    let grid = Grid::random(16, &mut source);
    c.bench_function("find_matches_16x16", |b| {
        b.iter(|| black_box(&grid).find_matches())
    });
}

fn bench_session(c: &mut Criterion) {
    let config = GameConfig::default().with_win_score(Score::MAX);
    c.bench_function("session_20_swaps", |b| {
        b.iter_batched(
            || MatchEngine::seeded(config, 5).expect("default config is valid"),
            |mut engine| play(&mut engine, 20),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_new_session, bench_find_matches, bench_session);
criterion_main!(benches);
