use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ising::IsingHamiltonian;

fn bench_enumeration(c: &mut Criterion) {
    let h = IsingHamiltonian::ring(12, 1.0, 0.1);

    c.bench_function("thermal_averages_ring12", |b| {
        b.iter(|| h.thermal_averages(black_box(2.0)).unwrap())
    });
    c.bench_function("ground_state_ring12", |b| {
        b.iter(|| h.ground_state(black_box(false)).unwrap())
    });
}

criterion_group!(benches, bench_enumeration);
criterion_main!(benches);
