use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mahjong_tenpai::analysis::standard_shanten;
use mahjong_tenpai::{calculate_waiting_tiles, random_hand, shanten, Hand, WallRng};

fn bench_shanten_ready(c: &mut Criterion) {
    let hand: Hand = "123m456p789s1122z".parse().unwrap();
    c.bench_function("shanten_ready_hand", |b| {
        b.iter(|| shanten(black_box(&hand)));
    });
}

fn bench_standard_search_dealt(c: &mut Criterion) {
    let mut rng = WallRng::new(42);
    let counts: Vec<_> = (0..100).map(|_| random_hand(&mut rng).counts()).collect();
    c.bench_function("standard_shanten_100_dealt", |b| {
        b.iter(|| {
            counts
                .iter()
                .map(|c| standard_shanten(black_box(c)) as i32)
                .sum::<i32>()
        });
    });
}

fn bench_waits(c: &mut Criterion) {
    let nine_gates: Hand = "1112345678999m".parse().unwrap();
    let orphans: Hand = "19m19p19s1234567z".parse().unwrap();
    c.bench_function("waits_nine_gates", |b| {
        b.iter(|| calculate_waiting_tiles(black_box(&nine_gates)));
    });
    c.bench_function("waits_thirteen_orphans", |b| {
        b.iter(|| calculate_waiting_tiles(black_box(&orphans)));
    });
}

criterion_group!(benches, bench_shanten_ready, bench_standard_search_dealt, bench_waits);
criterion_main!(benches);
