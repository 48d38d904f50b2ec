use criterion::{black_box, criterion_group, criterion_main, Criterion};
use power_split::{Channel, ChannelLocks, Distribution, Solver};

fn bench_adjust_two_partners(c: &mut Criterion) {
    let mut solver = Solver::new();
    let start = Distribution::even();

    c.bench_function("adjust_two_partners", |b| {
        b.iter(|| {
            solver.adjust(
                black_box(&start),
                ChannelLocks::empty(),
                Channel::Mana,
                black_box(157),
            )
        })
    });
}

fn bench_adjust_clamped(c: &mut Criterion) {
    let mut solver = Solver::new();
    let start = Distribution::even();

    c.bench_function("adjust_clamped", |b| {
        b.iter(|| {
            solver.adjust(
                black_box(&start),
                ChannelLocks::RESEARCH,
                Channel::Mana,
                black_box(240),
            )
        })
    });
}

fn bench_drag_sweep(c: &mut Criterion) {
    // Full slider sweep, the way a fast drag reports every tick
    c.bench_function("drag_sweep", |b| {
        b.iter(|| {
            let mut solver = Solver::new();
            let mut dist = Distribution::even();
            for value in 0..=power_split::TOTAL {
                dist = solver
                    .adjust(&dist, ChannelLocks::empty(), Channel::Skill, value)
                    .distribution;
            }
            black_box(dist)
        })
    });
}

criterion_group!(benches, bench_adjust_two_partners, bench_adjust_clamped, bench_drag_sweep);
criterion_main!(benches);
