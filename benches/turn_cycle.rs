//! Turn cycle benchmarks.

use builder_cards::games::cloud::CloudGameBuilder;
use builder_cards::CardId;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| {
        b.iter(|| CloudGameBuilder::new().seed(black_box(42)).build())
    });
}

fn bench_full_turn(c: &mut Criterion) {
    let lambda = CardId::new("lambda");

    c.bench_function("play_buy_end_turn", |b| {
        let opening = CloudGameBuilder::new().seed(42).build();
        b.iter(|| {
            let mut engine = opening.clone();
            while engine.play_card(0).is_ok() {}
            let _ = engine.buy_card(&lambda);
            black_box(engine.end_turn())
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = CloudGameBuilder::new().seed(42).build();

    c.bench_function("snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(benches, bench_new_game, bench_full_turn, bench_snapshot);
criterion_main!(benches);
