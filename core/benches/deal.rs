use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pexeso_core::*;

fn bench_deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("deal");
    for pairs in [DEFAULT_PAIRS, 18, MAX_PAIRS] {
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &pairs, |b, &pairs| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(ShuffledDeckGenerator::new(seed).generate(pairs))
            });
        });
    }
    group.finish();
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game", |b| {
        b.iter(|| {
            let mut session = Session::new(GameConfig::timed(60), ManualScheduler::new(), 7);
            for symbol in 1..=DEFAULT_PAIRS {
                let ids: Vec<CardId> = session
                    .engine()
                    .cards()
                    .iter()
                    .filter(|card| card.symbol() == symbol)
                    .map(|card| card.id())
                    .collect();
                session.reveal_card(ids[0]);
                session.reveal_card(ids[1]);
                session.advance(Duration::from_secs(1));
            }
            black_box(session.view())
        });
    });
}

criterion_group!(benches, bench_deal, bench_full_game);
criterion_main!(benches);
